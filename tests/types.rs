use loctree::Octree;

/// Ensure that trees instantiate for both scalar widths and common label types
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn scalar_and_label_types() {
    let _32 = Octree::<u32, f32>::build(&[], &[]).unwrap();
    let _64 = Octree::<u32, f64>::build(&[], &[]).unwrap();
    let _wide = Octree::<u64, f32>::build(&[], &[]).unwrap();
    let _size = Octree::<usize, f64>::build(&[], &[]).unwrap();
}

/// Queries are pure reads; a built tree may be shared across threads.
#[test]
fn trees_are_send_sync() {
    static_assertions::assert_impl_all!(Octree<u32, f32>: Send, Sync);
    static_assertions::assert_impl_all!(Octree<usize, f64>: Send, Sync);
}
