//! Property-based tests for Iso laws.
//!
//! - **RoundTrip**: `iso.reverse_get(iso.get(&s)) == s`
//! - **ReverseRoundTrip**: `iso.get(&iso.reverse_get(a)) == a`

use optica::iso;
use optica::optics::{iso_identity, iso_swap, Iso, IsoCompose, Lens, Prism};
use proptest::prelude::*;

fn check_iso_laws<S, A, I>(iso: &I, source: &S, value: &A) -> Result<(), TestCaseError>
where
    S: Clone + PartialEq + std::fmt::Debug,
    A: Clone + PartialEq + std::fmt::Debug,
    I: Iso<S, A>,
{
    prop_assert_eq!(&iso.reverse_get(iso.get(source)), source);
    prop_assert_eq!(&iso.get(&iso.reverse_get(value.clone())), value);
    Ok(())
}

fn chars() -> impl Iso<String, Vec<char>> + Clone {
    iso!(
        |text: &String| text.chars().collect::<Vec<_>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>()
    )
}

proptest! {
    #[test]
    fn prop_string_chars_iso(
        text in ".{0,16}",
        chars_value in prop::collection::vec(any::<char>(), 0..16),
    ) {
        check_iso_laws(&chars(), &text, &chars_value)?;
    }

    #[test]
    fn prop_swap_iso(pair in any::<(i32, bool)>(), swapped in any::<(bool, i32)>()) {
        check_iso_laws(&iso_swap::<i32, bool>(), &pair, &swapped)?;
    }

    #[test]
    fn prop_reversed_iso(
        text in ".{0,16}",
        chars_value in prop::collection::vec(any::<char>(), 0..16),
    ) {
        check_iso_laws(&chars().reverse(), &chars_value, &text)?;
    }

    #[test]
    fn prop_composed_iso(pair in any::<(i32, bool)>()) {
        let there_and_back = iso_swap::<i32, bool>().compose_iso(iso_swap::<bool, i32>());
        prop_assert_eq!(there_and_back.get(&pair), pair);
        check_iso_laws(&there_and_back, &pair, &pair)?;
    }

    #[test]
    fn prop_identity_iso(value in any::<i64>(), other in any::<i64>()) {
        check_iso_laws(&iso_identity::<i64>(), &value, &other)?;
    }

    #[test]
    fn prop_modify_maps_through_both_directions(text in "[a-z]{0,16}") {
        let reversed = chars().modify(text.clone(), |mut chars| {
            chars.reverse();
            chars
        });
        prop_assert_eq!(reversed, text.chars().rev().collect::<String>());
    }
}

#[test]
fn iso_views_as_lens_and_prism() {
    let swap = iso_swap::<i32, &str>();

    assert_eq!(swap.clone().as_lens().set((1, "a"), ("b", 2)), (2, "b"));
    assert_eq!(swap.as_prism().get_option(&(1, "a")), Some(("a", 1)));
}

#[test]
fn iso_compose_lens_is_a_lens() {
    let first = optica::optics::FunctionLens::new(
        |pair: &(bool, i32)| pair.0,
        |pair: (bool, i32), first: bool| (first, pair.1),
    );
    let swapped_first = iso_swap::<i32, bool>().compose_lens(first);

    assert!(swapped_first.get(&(1, true)));
    assert_eq!(swapped_first.set((1, true), false), (1, false));
}
