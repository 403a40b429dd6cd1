use agk_summation::{init, Summation};

#[test]
fn init_creates_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Summation>());
}
