use proptest::prelude::*;
use tagstore::{alternatives, VariantStorage, INVALID};

type Set = alternatives![u32, String, Vec<u8>];

/// Native-enum model the storage is checked against.
#[derive(Debug, Clone, PartialEq)]
enum Model {
    Number(u32),
    Text(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone)]
enum Operation {
    Emplace(Model),
    Destroy,
    CloneInto(usize),
    CloneFrom(usize),
    Take(usize),
    AssignFrom(usize),
}

const SLOTS: usize = 3;

fn model_strategy() -> impl Strategy<Value = Model> {
    prop_oneof![
        any::<u32>().prop_map(Model::Number),
        "[a-z]{0,12}".prop_map(Model::Text),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Model::Bytes),
    ]
}

fn operation_strategy() -> impl Strategy<Value = (usize, Operation)> {
    (
        0..SLOTS,
        prop_oneof![
            model_strategy().prop_map(Operation::Emplace),
            Just(Operation::Destroy),
            (0..SLOTS).prop_map(Operation::CloneInto),
            (0..SLOTS).prop_map(Operation::CloneFrom),
            (0..SLOTS).prop_map(Operation::Take),
            (0..SLOTS).prop_map(Operation::AssignFrom),
        ],
    )
}

fn observe(storage: &VariantStorage<Set>) -> Option<Model> {
    // SAFETY: each branch reads exactly the alternative the index names.
    unsafe {
        match storage.index() {
            0 => Some(Model::Number(*storage.assume_ref::<u32>())),
            1 => Some(Model::Text(storage.assume_ref::<String>().clone())),
            2 => Some(Model::Bytes(storage.assume_ref::<Vec<u8>>().clone())),
            INVALID => None,
            other => panic!("index {other} out of range"),
        }
    }
}

fn emplace(storage: &mut VariantStorage<Set>, value: Model) {
    let result = match value {
        Model::Number(n) => storage.emplace(n),
        Model::Text(s) => storage.emplace(s),
        Model::Bytes(b) => storage.emplace(b),
    };
    result.unwrap();
}

/// Two distinct mutable slots out of the array.
fn pair(
    slots: &mut [VariantStorage<Set>],
    a: usize,
    b: usize,
) -> (&mut VariantStorage<Set>, &mut VariantStorage<Set>) {
    assert_ne!(a, b);
    if a < b {
        let (lo, hi) = slots.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = slots.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

proptest! {
    #[test]
    fn test_storage_matches_enum_model(
        ops in proptest::collection::vec(operation_strategy(), 1..64)
    ) {
        let mut slots: Vec<VariantStorage<Set>> =
            (0..SLOTS).map(|_| VariantStorage::vacant()).collect();
        let mut model: Vec<Option<Model>> = vec![None; SLOTS];

        for (target, op) in ops {
            match op {
                Operation::Emplace(value) => {
                    if model[target].is_none() {
                        emplace(&mut slots[target], value.clone());
                        model[target] = Some(value);
                    } else {
                        prop_assert!(slots[target].emplace(0u32).is_err());
                    }
                }
                Operation::Destroy => {
                    slots[target].destroy();
                    model[target] = None;
                }
                Operation::CloneInto(source) => {
                    slots[target] = slots[source].clone();
                    model[target] = model[source].clone();
                }
                Operation::CloneFrom(source) if source != target => {
                    let (dst, src) = pair(&mut slots, target, source);
                    dst.clone_from(src);
                    model[target] = model[source].clone();
                }
                Operation::Take(source) if source != target => {
                    slots[target] = slots[source].take();
                    model[target] = model[source].take();
                }
                Operation::AssignFrom(source) if source != target => {
                    let (dst, src) = pair(&mut slots, target, source);
                    dst.assign_from(src);
                    model[target] = model[source].take();
                }
                _ => {}
            }

            for (slot, expected) in slots.iter().zip(&model) {
                prop_assert_eq!(&observe(slot), expected);
            }
        }
    }
}
