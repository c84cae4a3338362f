// ═══════════════════════════════════════════════════════════════════
// Storage Tests — LoadCache
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;

use sales_dashboard_core::errors::LoadError;
use sales_dashboard_core::services::loader_service::DataLoader;
use sales_dashboard_core::storage::cache::LoadCache;

const GOOD: &[u8] = b"Sucursal,Producto,A\xc3\xb1o,Mes,Unidades_vendidas,Ingreso_total,Costo_total\nA,X,2023,1,10,100,60\n";
const OTHER: &[u8] = b"Sucursal,Producto,A\xc3\xb1o,Mes,Unidades_vendidas,Ingreso_total,Costo_total\nB,Y,2023,2,1,1,1\n";
const BAD: &[u8] = b"Sucursal,Producto\nA,X\n";

fn load(bytes: &[u8]) -> Result<sales_dashboard_core::models::record::Dataset, LoadError> {
    DataLoader::new().load_from_bytes(bytes)
}

#[test]
fn miss_then_hit_returns_same_dataset() {
    let mut cache = LoadCache::new();
    let first = cache.get_or_load(GOOD, load).unwrap();
    let second = cache.get_or_load(GOOD, load).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn hit_does_not_call_loader() {
    let mut cache = LoadCache::new();
    cache.get_or_load(GOOD, load).unwrap();
    let result = cache.get_or_load(GOOD, |_| panic!("loader must not run on a hit"));
    assert!(result.is_ok());
}

#[test]
fn different_content_gets_own_entry() {
    let mut cache = LoadCache::new();
    let a = cache.get_or_load(GOOD, load).unwrap();
    let b = cache.get_or_load(OTHER, load).unwrap();
    assert_ne!(a.records[0].branch, b.records[0].branch);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.misses(), 2);
}

#[test]
fn failures_are_not_cached() {
    let mut cache = LoadCache::new();
    assert!(cache.get_or_load(BAD, load).is_err());
    assert!(cache.get_or_load(BAD, load).is_err());
    assert!(cache.is_empty());
    assert_eq!(cache.misses(), 2);
    assert!(cache.get(BAD).is_none());
}

#[test]
fn cached_result_matches_fresh_parse() {
    let mut cache = LoadCache::new();
    let cached = cache.get_or_load(GOOD, load).unwrap();
    assert_eq!(*cached, load(GOOD).unwrap());
    assert_eq!(cache.get(GOOD).map(|d| d.len()), Some(1));
}

#[test]
fn key_is_deterministic_and_content_based() {
    assert_eq!(LoadCache::key_for(GOOD), LoadCache::key_for(GOOD));
    assert_ne!(LoadCache::key_for(GOOD), LoadCache::key_for(OTHER));
}

#[test]
fn clear_drops_entries() {
    let mut cache = LoadCache::new();
    cache.get_or_load(GOOD, load).unwrap();
    cache.clear();
    assert!(cache.is_empty());
    cache.get_or_load(GOOD, load).unwrap();
    assert_eq!(cache.misses(), 2);
}
