#![no_main]
use libfuzzer_sys::fuzz_target;
use rsbits::bitseq::BitSequence;
use rsbits::rank::RankIndex;
use rsbits::select::SelectIndex;

fuzz_target!(|data: (Vec<u64>, usize)| {
    let (words, seed) = data;
    if words.is_empty() {
        return;
    }

    let len = seed % (words.len() * 64);
    if len == 0 {
        return;
    }

    let index = RankIndex::new(BitSequence::from_words(&words, len)).unwrap();

    // Check total rank against a literal count.
    let mut expected_total = 0;
    for i in 0..len {
        if (words[i / 64] >> (i % 64)) & 1 == 1 {
            expected_total += 1;
        }
    }
    assert_eq!(index.ones(), expected_total);

    // Check select/rank agreement for a random rank.
    if expected_total > 0 {
        let k = 1 + (seed / 13) % expected_total;
        let select = SelectIndex::new(&index);
        let pos = select.select(k).unwrap();
        assert!(pos >= 1 && pos <= len);
        assert!(index.sequence().get(pos - 1));
        assert_eq!(index.rank(pos).unwrap(), k);
        if pos > 1 {
            assert_eq!(index.rank(pos - 1).unwrap(), k - 1);
        }
    }

    // Serialization must round-trip every query.
    let restored = RankIndex::from_bytes(&index.to_bytes()).unwrap();
    assert_eq!(restored.ones(), expected_total);
    assert_eq!(restored.rank(len).unwrap(), index.rank(len).unwrap());
});
