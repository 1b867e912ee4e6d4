use super::*;
use crate::alternatives;
use crate::raw::{access, AlignedBuffer};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-test record of which alternative's destructor ran.
#[derive(Default)]
struct DropLog(RefCell<Vec<&'static str>>);

impl DropLog {
    fn take(&self) -> Vec<&'static str> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

macro_rules! tracked {
    ($($name:ident),*) => {$(
        #[derive(Clone)]
        struct $name(Rc<DropLog>);

        impl Drop for $name {
            fn drop(&mut self) {
                (self.0).0.borrow_mut().push(stringify!($name));
            }
        }
    )*};
}

tracked!(A, B, C);

type Abc = alternatives![A, B, C];
type Values = alternatives![u32, String, Vec<u8>];

#[test]
fn test_destroy_runs_only_the_selected_destructor() {
    let log = Rc::new(DropLog::default());
    let mut buf = AlignedBuffer::<Abc>::uninit();

    unsafe {
        access::write_at(buf.as_mut_ptr(), A(log.clone()));
        Abc::destroy(0, buf.as_mut_ptr());
    }
    assert_eq!(log.take(), ["A"]);

    unsafe {
        access::write_at(buf.as_mut_ptr(), B(log.clone()));
        Abc::destroy(1, buf.as_mut_ptr());
    }
    assert_eq!(log.take(), ["B"]);

    unsafe {
        access::write_at(buf.as_mut_ptr(), C(log.clone()));
        Abc::destroy(2, buf.as_mut_ptr());
    }
    assert_eq!(log.take(), ["C"]);
    assert_eq!(Rc::strong_count(&log), 1);
}

#[test]
fn test_out_of_range_destroy_is_a_no_op() {
    let log = Rc::new(DropLog::default());
    let mut buf = AlignedBuffer::<Abc>::uninit();

    unsafe {
        access::write_at(buf.as_mut_ptr(), B(log.clone()));
        Abc::destroy(3, buf.as_mut_ptr());
    }
    assert!(log.take().is_empty());
    assert_eq!(Rc::strong_count(&log), 2);

    unsafe { Abc::destroy(1, buf.as_mut_ptr()) };
    assert_eq!(log.take(), ["B"]);
}

#[test]
fn test_out_of_range_construct_and_assign_are_no_ops() {
    let mut src = AlignedBuffer::<Values>::uninit();
    let mut dst = AlignedBuffer::<Values>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), String::from("source"));
        access::write_at(dst.as_mut_ptr(), String::from("destination"));

        Values::copy_construct(3, dst.as_mut_ptr(), src.as_ptr());
        Values::move_construct(3, dst.as_mut_ptr(), src.as_mut_ptr());
        Values::copy_assign(3, dst.as_mut_ptr(), src.as_ptr());
        Values::move_assign(3, dst.as_mut_ptr(), src.as_mut_ptr());

        assert_eq!(access::as_ref_at::<String>(src.as_ptr()), "source");
        assert_eq!(access::as_ref_at::<String>(dst.as_ptr()), "destination");

        Values::destroy(1, src.as_mut_ptr());
        Values::destroy(1, dst.as_mut_ptr());
    }
}

#[test]
fn test_copy_construct_produces_equal_value() {
    let mut src = AlignedBuffer::<Values>::uninit();
    let mut dst = AlignedBuffer::<Values>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), vec![1u8, 2, 3]);
        Values::copy_construct(2, dst.as_mut_ptr(), src.as_ptr());

        assert_eq!(access::as_ref_at::<Vec<u8>>(dst.as_ptr()), &[1, 2, 3]);
        assert_eq!(access::as_ref_at::<Vec<u8>>(src.as_ptr()), &[1, 2, 3]);

        Values::destroy(2, src.as_mut_ptr());
        Values::destroy(2, dst.as_mut_ptr());
    }
}

#[test]
fn test_move_construct_transfers_ownership() {
    let log = Rc::new(DropLog::default());
    let mut src = AlignedBuffer::<Abc>::uninit();
    let mut dst = AlignedBuffer::<Abc>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), C(log.clone()));
        Abc::move_construct(2, dst.as_mut_ptr(), src.as_mut_ptr());
    }
    // A move never runs a destructor and never duplicates the value.
    assert!(log.take().is_empty());
    assert_eq!(Rc::strong_count(&log), 2);

    unsafe { Abc::destroy(2, dst.as_mut_ptr()) };
    assert_eq!(log.take(), ["C"]);
    assert_eq!(Rc::strong_count(&log), 1);
}

#[test]
fn test_copy_assign_between_same_alternative() {
    let mut src = AlignedBuffer::<Values>::uninit();
    let mut dst = AlignedBuffer::<Values>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), String::from("new"));
        access::write_at(dst.as_mut_ptr(), String::from("old"));
        Values::copy_assign(1, dst.as_mut_ptr(), src.as_ptr());

        assert_eq!(access::as_ref_at::<String>(dst.as_ptr()), "new");
        assert_eq!(access::as_ref_at::<String>(src.as_ptr()), "new");

        Values::destroy(1, src.as_mut_ptr());
        Values::destroy(1, dst.as_mut_ptr());
    }
}

#[test]
fn test_move_assign_drops_old_destination_value() {
    let log = Rc::new(DropLog::default());
    let other = Rc::new(DropLog::default());
    let mut src = AlignedBuffer::<Abc>::uninit();
    let mut dst = AlignedBuffer::<Abc>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), A(log.clone()));
        access::write_at(dst.as_mut_ptr(), A(other.clone()));
        Abc::move_assign(0, dst.as_mut_ptr(), src.as_mut_ptr());
    }
    assert_eq!(other.take(), ["A"]);
    assert!(log.take().is_empty());
    assert_eq!(Rc::strong_count(&other), 1);

    unsafe { Abc::destroy(0, dst.as_mut_ptr()) };
    assert_eq!(log.take(), ["A"]);
}

#[test]
fn test_trivial_alternatives_dispatch() {
    type Plain = alternatives![u8, u64, (u16, u16)];
    let mut src = AlignedBuffer::<Plain>::uninit();
    let mut dst = AlignedBuffer::<Plain>::uninit();

    unsafe {
        access::write_at(src.as_mut_ptr(), (7u16, 9u16));
        Plain::copy_construct(2, dst.as_mut_ptr(), src.as_ptr());
        assert_eq!(*access::as_ref_at::<(u16, u16)>(dst.as_ptr()), (7, 9));

        access::write_at(src.as_mut_ptr(), 41u64);
        access::write_at(dst.as_mut_ptr(), 0u64);
        Plain::move_assign(1, dst.as_mut_ptr(), src.as_mut_ptr());
        assert_eq!(*access::as_ref_at::<u64>(dst.as_ptr()), 41);
    }
}
