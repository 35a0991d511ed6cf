use std::sync::{Arc, atomic::Ordering};

use homestay_service::{Error, SearchRequest};

use super::{MemoryCache, MemoryCatalog, house, service_with};

fn request() -> SearchRequest {
	SearchRequest::default()
}

#[tokio::test]
async fn inverted_dates_fail_before_any_store_traffic() {
	let catalog = Arc::new(MemoryCatalog::with_houses(vec![house(1, 3)]));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());
	let req = SearchRequest {
		start_date: Some("2024-06-20".to_string()),
		end_date: Some("2024-06-15".to_string()),
		..request()
	};
	let err = service.search(&req).await.expect_err("Expected an invalid filter error.");

	assert!(matches!(err, Error::InvalidFilter { .. }), "Unexpected error: {err:?}");
	assert_eq!(catalog.catalog_call_count(), 0);
	assert_eq!(cache.get_calls.load(Ordering::SeqCst), 0);
	assert_eq!(cache.put_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_dates_are_invalid_filters() {
	let catalog = Arc::new(MemoryCatalog::default());
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());

	for raw in ["2024-6-15", "June 15", "2024/06/15"] {
		let req = SearchRequest { start_date: Some(raw.to_string()), ..request() };
		let err = service.search(&req).await.expect_err("Expected an invalid filter error.");

		assert!(matches!(err, Error::InvalidFilter { .. }), "Unexpected error for {raw}: {err:?}");
	}

	assert_eq!(catalog.catalog_call_count(), 0);
	assert_eq!(cache.get_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_numeric_page_and_area_are_invalid_filters() {
	let catalog = Arc::new(MemoryCatalog::default());
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());

	let req = SearchRequest { page: Some("two".to_string()), ..request() };
	assert!(matches!(
		service.search(&req).await,
		Err(Error::InvalidFilter { .. })
	));

	let req = SearchRequest { area_id: Some("downtown".to_string()), ..request() };
	assert!(matches!(
		service.search(&req).await,
		Err(Error::InvalidFilter { .. })
	));

	assert_eq!(catalog.catalog_call_count(), 0);
}

#[tokio::test]
async fn page_zero_is_an_invalid_filter() {
	let catalog = Arc::new(MemoryCatalog::default());
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());
	let req = SearchRequest { page: Some("0".to_string()), ..request() };
	let err = service.search(&req).await.expect_err("Expected an invalid filter error.");

	assert!(matches!(err, Error::InvalidFilter { .. }), "Unexpected error: {err:?}");
	assert_eq!(catalog.catalog_call_count(), 0);
	assert_eq!(cache.get_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_parameters_normalize_to_defaults() {
	let catalog = Arc::new(MemoryCatalog::with_houses(vec![house(1, 3)]));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog, cache.clone());
	let req = SearchRequest {
		area_id: Some("".to_string()),
		start_date: Some(" ".to_string()),
		end_date: Some("".to_string()),
		sort_key: Some("".to_string()),
		page: Some("".to_string()),
	};

	service.search(&req).await.expect("Expected the search to succeed.");

	// Blank fields land on the same canonical key as absent ones.
	assert!(cache.contains("houses____new", 1));
}

#[tokio::test]
async fn unknown_sort_keys_share_the_default_cache_key() {
	let catalog = Arc::new(MemoryCatalog::with_houses(vec![house(1, 3)]));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());

	let req = SearchRequest { sort_key: Some("cheapest-first".to_string()), ..request() };
	service.search(&req).await.expect("Expected the search to succeed.");

	assert_eq!(catalog.house_calls.load(Ordering::SeqCst), 1);

	// A later plain request is logically identical and must hit that entry.
	let req = SearchRequest { sort_key: Some("new".to_string()), ..request() };
	service.search(&req).await.expect("Expected the search to succeed.");

	assert_eq!(catalog.house_calls.load(Ordering::SeqCst), 1);
}
