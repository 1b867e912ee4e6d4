use core::mem::{align_of, size_of};

use tagstore::list::{round_up, I1};
use tagstore::*;

#[allow(dead_code)]
#[repr(align(32))]
struct Aligned32(u8);

#[test]
fn test_int_char_double() {
    type Set = alternatives![i32, char, f64];
    assert_eq!(Set::MAX_SIZE, size_of::<f64>());
    assert_eq!(Set::MAX_ALIGN, align_of::<f64>());
    assert_eq!(AlignedBuffer::<Set>::SIZE, size_of::<f64>());
}

#[test]
fn test_size_and_alignment_dominated_by_different_alternatives() {
    type Set = alternatives![[u64; 9], Aligned32, u16];
    assert_eq!(Set::MAX_SIZE, 72);
    assert_eq!(Set::MAX_ALIGN, 32);
    assert_eq!(AlignedBuffer::<Set>::SIZE, round_up(72, 32));
    assert_eq!(AlignedBuffer::<Set>::ALIGN, 32);

    let storage = VariantStorage::<Set>::with(5u16);
    assert_eq!(storage.data() as usize % 32, 0);
}

#[test]
fn test_type_id_queries() {
    type Set = alternatives![u8, String, Vec<u8>];
    assert!(Set::contains::<String>());
    assert!(!Set::contains::<&'static str>());
    assert_eq!(Set::position::<Vec<u8>>(), Some(2));
    assert!(!Set::has_duplicates());
}

#[test]
fn test_explicit_index_alias() {
    type Set = alternatives![u8, String];
    let storage = RawStorage::<Set>::with::<String, I1>(String::new());
    assert_eq!(storage.index(), <Set as IndexOf<String, I1>>::INDEX);
}

#[test]
fn test_report_strategies() {
    let trivial = LayoutReport::of::<alternatives![u8, f32]>();
    let owning = LayoutReport::of::<alternatives![u8, Box<u8>]>();

    assert_eq!(trivial.strategy, Strategy::AllTrivial);
    assert_eq!(owning.strategy, Strategy::Dispatching);
    assert_eq!(owning.buffer_size, size_of::<Box<u8>>());
}
