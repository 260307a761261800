#![cfg(feature = "list")]
//! Contract tests shared by `SingleList` and `DoubleList`.
//!
//! Every test is generated once per list type so that both lists are held
//! to exactly the same observable behaviour.

use rstest::rstest;
use sapling::CollectionError;
use sapling::list::{CustomList, DoubleList, SingleList};

fn lettered<L: CustomList<String> + Default>(letters: &str) -> L {
    let mut list = L::default();
    for letter in letters.chars() {
        list.add(letter.to_string());
    }
    list
}

fn contents<L: CustomList<String>>(list: &L) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

macro_rules! list_contract_tests {
    ($prefix:ident, $list:ident) => {
        paste::paste! {
            #[rstest]
            fn [<test_ $prefix _add_appends_in_order>]() {
                let list: $list<String> = lettered("ABC");
                assert_eq!(contents(&list), vec!["A", "B", "C"]);
                assert_eq!(CustomList::len(&list), 3);
                assert!(!CustomList::is_empty(&list));
            }

            #[rstest]
            #[case(0, "A")]
            #[case(3, "D")]
            #[case(7, "H")]
            fn [<test_ $prefix _get_returns_element_at_index>](
                #[case] index: usize,
                #[case] expected: &str,
            ) {
                let list: $list<String> = lettered("ABCDEFGH");
                assert_eq!(CustomList::get(&list, index).map(String::as_str), Ok(expected));
            }

            #[rstest]
            fn [<test_ $prefix _get_out_of_range>]() {
                let list: $list<String> = lettered("AB");
                assert_eq!(
                    CustomList::get(&list, 2),
                    Err(CollectionError::IndexOutOfRange { index: 2, length: 2 })
                );
            }

            #[rstest]
            fn [<test_ $prefix _set_returns_previous_element>]() {
                let mut list: $list<String> = lettered("ABCD");
                assert_eq!(CustomList::set(&mut list, 3, "DA".to_string()), Ok("D".to_string()));
                assert_eq!(contents(&list), vec!["A", "B", "C", "DA"]);
            }

            #[rstest]
            fn [<test_ $prefix _set_out_of_range_leaves_list_unchanged>]() {
                let mut list: $list<String> = lettered("ABCDEFGH");
                assert_eq!(
                    CustomList::set(&mut list, 10, "X".to_string()),
                    Err(CollectionError::IndexOutOfRange { index: 10, length: 8 })
                );
                assert_eq!(contents(&list), vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
            }

            #[rstest]
            #[case(0, "XABC")]
            #[case(2, "ABXC")]
            #[case(3, "ABCX")]
            fn [<test_ $prefix _insert_shifts_later_elements>](
                #[case] index: usize,
                #[case] expected: &str,
            ) {
                let mut list: $list<String> = lettered("ABC");
                assert_eq!(CustomList::insert(&mut list, index, "X".to_string()), Ok(()));
                let joined: String = contents(&list).concat();
                assert_eq!(joined, expected);
            }

            #[rstest]
            fn [<test_ $prefix _insert_past_length_fails>]() {
                let mut list: $list<String> = lettered("ABC");
                assert_eq!(
                    CustomList::insert(&mut list, 4, "X".to_string()),
                    Err(CollectionError::IndexOutOfRange { index: 4, length: 3 })
                );
                assert_eq!(CustomList::len(&list), 3);
            }

            #[rstest]
            #[case(0, "A", "BCD")]
            #[case(1, "B", "ACD")]
            #[case(3, "D", "ABC")]
            fn [<test_ $prefix _remove_at_returns_removed_element>](
                #[case] index: usize,
                #[case] removed: &str,
                #[case] rest: &str,
            ) {
                let mut list: $list<String> = lettered("ABCD");
                assert_eq!(
                    CustomList::remove_at(&mut list, index).as_deref(),
                    Ok(removed)
                );
                assert_eq!(contents(&list).concat(), rest);
            }

            #[rstest]
            fn [<test_ $prefix _remove_at_on_empty_list_fails>]() {
                let mut list: $list<String> = $list::new();
                assert_eq!(
                    CustomList::remove_at(&mut list, 0),
                    Err(CollectionError::IndexOutOfRange { index: 0, length: 0 })
                );
            }

            #[rstest]
            fn [<test_ $prefix _remove_takes_first_match_only>]() {
                let mut list: $list<String> = lettered("ABAB");
                assert!(CustomList::remove(&mut list, &"B".to_string()));
                assert_eq!(contents(&list).concat(), "AAB");
                assert!(!CustomList::remove(&mut list, &"Z".to_string()));
                assert_eq!(CustomList::len(&list), 3);
            }

            #[rstest]
            fn [<test_ $prefix _index_of_and_contains>]() {
                let list: $list<String> = lettered("ABCB");
                assert_eq!(CustomList::index_of(&list, &"B".to_string()), Some(1));
                assert_eq!(CustomList::index_of(&list, &"Z".to_string()), None);
                assert!(CustomList::contains(&list, &"C".to_string()));
                assert!(!CustomList::contains(&list, &"Z".to_string()));
            }

            #[rstest]
            fn [<test_ $prefix _clear_then_reuse>]() {
                let mut list: $list<String> = lettered("ABC");
                CustomList::clear(&mut list);
                assert!(CustomList::is_empty(&list));
                assert_eq!(CustomList::iter(&list).next(), None);

                CustomList::add(&mut list, "A".to_string());
                assert_eq!(CustomList::remove_at(&mut list, 0), Ok("A".to_string()));
                assert!(CustomList::is_empty(&list));
            }

            #[rstest]
            fn [<test_ $prefix _edit_script>]() {
                let mut list: $list<String> = lettered("ABCDEFGH");
                CustomList::set(&mut list, 3, "DA".to_string()).unwrap();
                CustomList::remove_at(&mut list, 2).unwrap();
                CustomList::insert(&mut list, 2, "CD".to_string()).unwrap();
                assert!(CustomList::set(&mut list, 10, "X".to_string()).is_err());
                assert!(CustomList::remove_at(&mut list, 10).is_err());
                CustomList::remove_at(&mut list, 6).unwrap();
                CustomList::insert(&mut list, 6, "GB".to_string()).unwrap();
                CustomList::insert(&mut list, 0, "Z".to_string()).unwrap();
                CustomList::remove_at(&mut list, 0).unwrap();
                assert!(CustomList::remove(&mut list, &"E".to_string()));
                assert!(!CustomList::remove(&mut list, &"G".to_string()));

                assert_eq!(contents(&list), vec!["A", "B", "CD", "DA", "F", "GB", "H"]);
                assert_eq!(list.to_string(), "[A, B, CD, DA, F, GB, H]");
            }

            #[rstest]
            fn [<test_ $prefix _equality_and_clone>]() {
                let list: $list<String> = lettered("ABC");
                let copy = list.clone();
                assert_eq!(list, copy);
                assert_ne!(list, lettered::<$list<String>>("ABD"));
                assert_ne!(list, lettered::<$list<String>>("AB"));
            }

            #[rstest]
            fn [<test_ $prefix _collects_and_iterates_by_value>]() {
                let list: $list<u32> = (1..=4).collect();
                let doubled: Vec<u32> = list.into_iter().map(|element| element * 2).collect();
                assert_eq!(doubled, vec![2, 4, 6, 8]);
            }
        }
    };
}

list_contract_tests!(single_list, SingleList);
list_contract_tests!(double_list, DoubleList);

#[rstest]
fn test_lists_agree_on_random_edits() {
    let mut single: SingleList<u32> = SingleList::new();
    let mut double: DoubleList<u32> = DoubleList::new();
    let mut state: u32 = 7;

    for step in 0..500 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let length = u32::try_from(CustomList::len(&single)).unwrap();
        let index = (state >> 8) % (length + 1);
        let index = usize::try_from(index).unwrap();
        match state % 4 {
            0 | 1 => {
                assert_eq!(single.insert(index, step), double.insert(index, step));
            }
            2 => {
                assert_eq!(single.remove_at(index), double.remove_at(index));
            }
            _ => {
                assert_eq!(single.set(index, step), double.set(index, step));
            }
        }
        assert!(single.iter().eq(double.iter()));
    }
}
