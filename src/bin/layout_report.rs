//! Smoke program: drives the destroy dispatcher over three alternatives
//! with a shared drop recorder, then prints layout reports as JSON.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use tagstore::{alternatives, DestroyDispatch, LayoutReport, VariantStorage};

type Recorder = Rc<RefCell<Vec<&'static str>>>;

struct A(Recorder);
struct B(Recorder);
struct C(Recorder);

impl Drop for A {
    fn drop(&mut self) {
        self.0.borrow_mut().push("A");
    }
}

impl Drop for B {
    fn drop(&mut self) {
        self.0.borrow_mut().push("B");
    }
}

impl Drop for C {
    fn drop(&mut self) {
        self.0.borrow_mut().push("C");
    }
}

type Abc = alternatives![A, B, C];

fn main() -> Result<()> {
    let recorder = Recorder::default();

    let mut storage = VariantStorage::<Abc>::with(A(recorder.clone()));
    // Raw dispatch, the way an owner drives it by hand.
    unsafe {
        Abc::destroy(storage.index(), storage.data_mut());
        storage
            .set_index(tagstore::INVALID)
            .context("resetting the active index")?;
    }
    ensure!(
        *recorder.borrow() == ["A"],
        "destroy(0) ran {:?}",
        recorder.borrow()
    );
    println!("destroy(0) ran only A's destructor");

    recorder.borrow_mut().clear();
    storage.emplace(C(recorder.clone()))?;
    drop(storage);
    ensure!(*recorder.borrow() == ["C"], "teardown ran {:?}", recorder.borrow());
    println!("teardown ran only C's destructor");

    let reports = [
        LayoutReport::of::<alternatives![i32, char, f64]>(),
        LayoutReport::of::<alternatives![u8, String, Vec<u64>]>(),
        LayoutReport::of::<Abc>(),
    ];
    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
