use std::sync::{Arc, atomic::Ordering};

use homestay_service::HouseSummary;
use homestay_storage::models::AreaRow;

use super::{HouseFixture, MemoryCache, MemoryCatalog, house, service_with};

fn parse_houses(body: &str) -> Vec<HouseSummary> {
	serde_json::from_str(body).expect("Expected a house list body.")
}

#[tokio::test]
async fn home_widget_lists_most_booked_covered_houses() {
	let houses = vec![
		HouseFixture { order_count: 12, ..house(1, 3) },
		HouseFixture { order_count: 30, cover_image: None, ..house(2, 3) },
		HouseFixture { order_count: 9, ..house(3, 3) },
		HouseFixture { order_count: 25, ..house(4, 5) },
		HouseFixture { order_count: 2, ..house(5, 5) },
		HouseFixture { order_count: 7, ..house(6, 5) },
		HouseFixture { order_count: 5, ..house(7, 5) },
	];
	let catalog = Arc::new(MemoryCatalog::with_houses(houses));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog, cache.clone());
	let widget = parse_houses(&service.home_widget().await.expect("Expected the widget to load."));
	let ids: Vec<i64> = widget.iter().map(|house| house.house_id).collect();

	// House 2 leads on bookings but has no cover image; the cap is five.
	assert_eq!(ids, vec![4, 1, 3, 6, 7]);
	assert!(cache.contains("home_page_data", 0));
}

#[tokio::test]
async fn home_widget_hits_skip_the_catalog() {
	let catalog = Arc::new(MemoryCatalog::with_houses(vec![house(1, 3)]));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache);
	let first = service.home_widget().await.expect("Expected the widget to load.");
	let second = service.home_widget().await.expect("Expected the widget to load.");

	assert_eq!(first, second);
	assert_eq!(catalog.top_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn area_list_round_trips_and_caches() {
	let mut fixture = MemoryCatalog::default();

	fixture.areas = vec![
		AreaRow { area_id: 1, name: "Old Town".to_string() },
		AreaRow { area_id: 2, name: "Riverside".to_string() },
	];

	let catalog = Arc::new(fixture);
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog.clone(), cache.clone());
	let body = service.areas().await.expect("Expected the area list to load.");
	let areas: Vec<homestay_service::AreaItem> =
		serde_json::from_str(&body).expect("Expected an area list body.");

	assert_eq!(areas.len(), 2);
	assert_eq!(areas[0].name, "Old Town");
	assert!(cache.contains("area_info", 0));

	let again = service.areas().await.expect("Expected the area list to load.");

	assert_eq!(body, again);
	assert_eq!(catalog.area_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn an_empty_area_catalog_is_an_empty_list() {
	let catalog = Arc::new(MemoryCatalog::default());
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let body = service.areas().await.expect("Expected the area list to load.");

	assert_eq!(body, "[]");
}
