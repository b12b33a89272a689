use dynarr::DynArr;

#[test]
fn test_pop_empty_array() {
    let mut arr: DynArr<i32> = DynArr::new();

    assert_eq!(arr.pop(), None);
}

#[test]
fn test_pop_returns_last_element() {
    let mut arr = DynArr::new();
    arr.append(1);
    arr.append(2);

    assert_eq!(arr.pop(), Some(2));
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.pop(), Some(1));
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.pop(), None);
}

#[test]
fn test_round_trip_reverse_order() {
    let mut arr = DynArr::new();
    for i in 0..10 {
        arr.append(i);
    }

    for expected in (0..10).rev() {
        assert_eq!(arr.pop(), Some(expected));
    }
    assert!(arr.is_empty());
}

#[test]
fn test_shrink_target_uses_pre_pop_size() {
    let mut arr: DynArr<i32> = DynArr::with_capacity(20);
    for i in 0..5 {
        arr.append(i);
    }

    // Occupancy after the pop would be 4/20 < 1/4, so the block shrinks
    // before the removal. The target is twice the pre-pop size (5 * 2 = 10),
    // not twice the post-pop size.
    assert_eq!(arr.pop(), Some(4));

    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.len(), 4);
}

#[test]
fn test_no_shrink_at_exactly_one_quarter() {
    let mut arr: DynArr<i32> = DynArr::with_capacity(20);
    for i in 0..6 {
        arr.append(i);
    }

    // 5/20 is exactly the threshold, not below it.
    assert_eq!(arr.pop(), Some(5));

    assert_eq!(arr.capacity(), 20);
    assert_eq!(arr.len(), 5);
}

#[test]
fn test_shrink_preserves_elements() {
    let mut arr: DynArr<i32> = DynArr::with_capacity(20);
    for i in 0..5 {
        arr.append(i);
    }

    arr.pop();

    for i in 0..4 {
        assert_eq!(arr.get(i as usize), Some(i));
    }
}

#[test]
fn test_pop_twenty_elements_scenario() {
    let mut arr = DynArr::new();
    for i in 0..20 {
        arr.append(i);
    }
    assert_eq!(arr.capacity(), 20);

    for expected in (0..20).rev() {
        assert_eq!(arr.pop(), Some(expected));
        assert!(arr.len() <= arr.capacity());
    }

    assert!(arr.is_empty());
    assert_eq!(arr.pop(), None);
}

#[test]
fn test_capacity_tracks_size_downward() {
    let mut arr = DynArr::new();
    for i in 0..10 {
        arr.append(i);
    }

    for _ in 0..10 {
        arr.pop();
    }

    // Repeated shrinks walk the capacity down with the live size.
    assert!(arr.capacity() < 10);
}
