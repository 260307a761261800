//! Harness Entry Point
//!
//! Runs scripted scenarios against every sapling collection and checks the
//! observable results. Exits with an error on the first failed check.
//!
//! Usage:
//!   harness [--suite all|single-list|double-list|map]
//!
//! Log output is controlled through `RUST_LOG`.

use std::fmt;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use sapling::CollectionError;
use sapling::list::{CustomList, DoubleList, SingleList};
use sapling::map::TreeMap;
use sapling::query::Query;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Suite {
    All,
    SingleList,
    DoubleList,
    Map,
}

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "Exercises the sapling collections and checks their behaviour")]
struct Cli {
    /// Suite to run
    #[arg(long, short = 's', value_enum, default_value_t = Suite::All)]
    suite: Suite,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sapling=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!(suite = ?cli.suite, "starting harness");

    if matches!(cli.suite, Suite::All | Suite::SingleList) {
        run_list_suite("single-list", SingleList::<String>::new())
            .context("single list suite failed")?;
    }
    if matches!(cli.suite, Suite::All | Suite::DoubleList) {
        run_list_suite("double-list", DoubleList::<String>::new())
            .context("double list suite failed")?;
    }
    if matches!(cli.suite, Suite::All | Suite::Map) {
        run_map_suite().context("map suite failed")?;
    }

    tracing::info!("all checks passed");
    Ok(())
}

/// Compares `actual` against `expected` and logs the outcome.
fn check<T>(suite: &str, label: &str, actual: T, expected: T) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    ensure!(
        actual == expected,
        "{suite}: {label}: expected {expected:?}, got {actual:?}"
    );
    tracing::info!(suite, check = label, "passed");
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Lists
// =============================================================================

fn run_list_suite<L>(suite: &str, mut list: L) -> Result<()>
where
    L: CustomList<String> + fmt::Display,
    for<'a> &'a L: Query<Item = &'a String>,
{
    for letter in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        list.add(letter.to_string());
    }
    check(suite, "add", list.to_string(), "[A, B, C, D, E, F, G, H]".to_string())?;

    check(suite, "set", list.set(3, "DA".to_string()), Ok("D".to_string()))?;
    check(suite, "remove_at", list.remove_at(2), Ok("C".to_string()))?;
    list.insert(2, "CD".to_string())?;
    check(suite, "insert", list.to_string(), "[A, B, CD, DA, E, F, G, H]".to_string())?;

    let out_of_range = Err(CollectionError::IndexOutOfRange {
        index: 10,
        length: 8,
    });
    check(suite, "set out of range", list.set(10, "X".to_string()), out_of_range.clone())?;
    check(suite, "remove_at out of range", list.remove_at(10), out_of_range)?;

    check(suite, "remove_at near end", list.remove_at(6), Ok("G".to_string()))?;
    list.insert(6, "GB".to_string())?;
    list.insert(0, "Z".to_string())?;
    check(suite, "remove_at front", list.remove_at(0), Ok("Z".to_string()))?;
    check(suite, "remove present", list.remove(&"E".to_string()), true)?;
    check(suite, "remove absent", list.remove(&"G".to_string()), false)?;
    check(suite, "contents", list.to_string(), "[A, B, CD, DA, F, GB, H]".to_string())?;
    check(suite, "index_of", list.index_of(&"F".to_string()), Some(4))?;
    check(suite, "contains", list.contains(&"H".to_string()), true)?;

    let after_d: Vec<&String> = list
        .filter_where(|element: &&String| element.as_str() > "D")
        .collect();
    let expected = strings(&["DA", "F", "GB", "H"]);
    check(suite, "filter_where", after_d, expected.iter().collect())?;

    let lower: Vec<String> = list.select(|element: &String| element.to_lowercase()).collect();
    check(suite, "select", lower, strings(&["a", "b", "cd", "da", "f", "gb", "h"]))?;

    let letters: String = list.select_many(|element: &String| element.chars()).collect();
    check(suite, "select_many", letters, "ABCDDAFGBH".to_string())?;

    list.clear();
    check(suite, "clear", list.len(), 0)?;
    list.add("A".to_string());
    check(suite, "remove_at only element", list.remove_at(0), Ok("A".to_string()))?;
    check(suite, "empty", list.is_empty(), true)?;

    Ok(())
}

// =============================================================================
// Map
// =============================================================================

fn run_map_suite() -> Result<()> {
    const SUITE: &str = "map";

    let mut map = TreeMap::new();
    let inserts = [
        (42, "A"),
        (25, "B"),
        (65, "C"),
        (12, "D"),
        (37, "E"),
        (13, "F"),
        (30, "G"),
        (43, "H"),
        (87, "I"),
        (99, "J"),
        (9, "K"),
    ];
    for (key, value) in inserts {
        map.add(key, value.to_string());
    }
    check(SUITE, "count", map.len(), 11)?;
    check(
        SUITE,
        "keys",
        map.keys().copied().collect::<Vec<_>>(),
        vec![42, 65, 87, 99, 43, 25, 37, 30, 12, 13, 9],
    )?;
    check(
        SUITE,
        "entries",
        map.entries().map(|(key, _)| *key).collect::<Vec<_>>(),
        vec![9, 12, 13, 25, 30, 37, 42, 43, 65, 87, 99],
    )?;

    map.add(23, "L".to_string());
    check(SUITE, "set", map.set(&12, "DA".to_string()), Ok("D".to_string()))?;
    check(
        SUITE,
        "set missing",
        map.set(&100, "X".to_string()),
        Err(CollectionError::KeyNotFound),
    )?;
    check(SUITE, "get", map.get(&37).map(String::as_str), Ok("E"))?;

    for key in [87, 25, 99, 65, 42] {
        let before = map.len();
        check(SUITE, "remove", map.remove(&key), true)?;
        check(SUITE, "remove count", map.len(), before - 1)?;
    }
    check(SUITE, "remove absent", map.remove(&42), false)?;
    check(SUITE, "get missing", map.get(&99), Err(CollectionError::KeyNotFound))?;
    check(SUITE, "try_get", map.try_get(&43).map(String::as_str), Some("H"))?;
    check(SUITE, "contains_key", map.contains_key(&23), true)?;
    check(SUITE, "contains_value", map.contains_value(&"L".to_string()), true)?;

    check(
        SUITE,
        "keys after removal",
        map.keys().copied().collect::<Vec<_>>(),
        vec![43, 30, 37, 12, 13, 23, 9],
    )?;
    check(
        SUITE,
        "values after removal",
        map.values().cloned().collect::<Vec<_>>(),
        strings(&["H", "G", "E", "DA", "F", "L", "K"]),
    )?;

    let large_keys: Vec<(i32, String)> = map
        .filter_where(|(key, _)| **key > 30)
        .map(|(key, value)| (*key, value.clone()))
        .collect();
    check(
        SUITE,
        "filter_where by key",
        large_keys,
        vec![(37, "E".to_string()), (43, "H".to_string())],
    )?;

    let late_values: Vec<(i32, String)> = map
        .filter_where(|(_, value)| value.as_str() > "H")
        .map(|(key, value)| (*key, value.clone()))
        .collect();
    check(
        SUITE,
        "filter_where by value",
        late_values,
        vec![(9, "K".to_string()), (23, "L".to_string())],
    )?;

    let doubled: Vec<(i32, String)> = map
        .select(|(key, value)| (key * 2, format!("{value}{}", value.to_lowercase())))
        .collect();
    check(
        SUITE,
        "select",
        doubled,
        vec![
            (18, "Kk".to_string()),
            (24, "DAda".to_string()),
            (26, "Ff".to_string()),
            (46, "Ll".to_string()),
            (60, "Gg".to_string()),
            (74, "Ee".to_string()),
            (86, "Hh".to_string()),
        ],
    )?;

    map.clear();
    check(SUITE, "clear", map.is_empty(), true)?;
    map.add(1, "A".to_string());
    check(SUITE, "add after clear", map.to_string(), "{1: A}".to_string())?;

    Ok(())
}
