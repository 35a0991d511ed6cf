use std::sync::Arc;

use time::macros::date;

use homestay_service::{ResultPage, SearchRequest};

use super::{HouseFixture, MemoryCache, MemoryCatalog, house, service_with};

fn area_request(page: &str, sort_key: &str) -> SearchRequest {
	SearchRequest {
		area_id: Some("3".to_string()),
		sort_key: Some(sort_key.to_string()),
		page: Some(page.to_string()),
		..SearchRequest::default()
	}
}

fn parse_page(body: &str) -> ResultPage {
	serde_json::from_str(body).expect("Expected a result page body.")
}

fn house_ids(page: &ResultPage) -> Vec<i64> {
	page.houses.iter().map(|house| house.house_id).collect()
}

/// Three houses published on consecutive days, oldest first.
fn staggered_houses() -> Vec<HouseFixture> {
	vec![
		HouseFixture { created_on: date!(2024 - 05 - 01), ..house(1, 3) },
		HouseFixture { created_on: date!(2024 - 05 - 02), ..house(2, 3) },
		HouseFixture { created_on: date!(2024 - 05 - 03), ..house(3, 3) },
	]
}

#[tokio::test]
async fn newest_sort_paginates_most_recent_first() {
	let catalog = Arc::new(MemoryCatalog::with_houses(staggered_houses()));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let page = parse_page(
		&service.search(&area_request("1", "new")).await.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&page), vec![3, 2]);
	assert_eq!(page.total_page, 2);
	assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn the_last_page_holds_the_remainder() {
	let catalog = Arc::new(MemoryCatalog::with_houses(staggered_houses()));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let page = parse_page(
		&service.search(&area_request("2", "new")).await.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&page), vec![1]);
	assert_eq!(page.total_page, 2);
	assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn out_of_range_pages_are_empty_and_never_cached() {
	let catalog = Arc::new(MemoryCatalog::with_houses(staggered_houses()));
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog, cache.clone());
	let page = parse_page(
		&service.search(&area_request("3", "new")).await.expect("Expected the search to succeed."),
	);

	assert!(page.houses.is_empty());
	assert_eq!(page.total_page, 2);
	assert_eq!(page.current_page, 3);
	assert!(cache.stored_entries().is_empty());
}

#[tokio::test]
async fn empty_result_sets_report_zero_pages_and_skip_the_cache() {
	let catalog = Arc::new(MemoryCatalog::default());
	let cache = Arc::new(MemoryCache::default());
	let service = service_with(catalog, cache.clone());
	let page = parse_page(
		&service.search(&area_request("1", "new")).await.expect("Expected the search to succeed."),
	);

	assert!(page.houses.is_empty());
	assert_eq!(page.total_page, 0);
	assert!(cache.stored_entries().is_empty());
}

#[tokio::test]
async fn repeated_requests_agree_on_ordering_and_page_count() {
	let catalog = Arc::new(MemoryCatalog::with_houses(staggered_houses()));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let first = service.search(&area_request("1", "new")).await.expect("Expected the search to succeed.");
	let second =
		service.search(&area_request("1", "new")).await.expect("Expected the search to succeed.");

	assert_eq!(first, second);
}

#[tokio::test]
async fn equal_prices_order_by_ascending_house_id() {
	let houses = vec![
		HouseFixture { price: 20_000, ..house(5, 3) },
		HouseFixture { price: 20_000, ..house(2, 3) },
		HouseFixture { price: 15_000, ..house(9, 3) },
	];
	let catalog = Arc::new(MemoryCatalog::with_houses(houses));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let page = parse_page(
		&service
			.search(&area_request("1", "price-inc"))
			.await
			.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&page), vec![9, 2]);

	let page = parse_page(
		&service
			.search(&area_request("2", "price-inc"))
			.await
			.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&page), vec![5]);
}

#[tokio::test]
async fn price_descending_and_booking_sorts_respect_their_keys() {
	let houses = vec![
		HouseFixture { price: 30_000, order_count: 1, ..house(1, 3) },
		HouseFixture { price: 10_000, order_count: 9, ..house(2, 3) },
		HouseFixture { price: 20_000, order_count: 4, ..house(3, 3) },
	];
	let catalog = Arc::new(MemoryCatalog::with_houses(houses));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let by_price = parse_page(
		&service
			.search(&area_request("1", "price-des"))
			.await
			.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&by_price), vec![1, 3]);

	let by_bookings = parse_page(
		&service
			.search(&area_request("1", "booking"))
			.await
			.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&by_bookings), vec![2, 3]);
}

#[tokio::test]
async fn area_filter_only_returns_that_area() {
	let houses = vec![house(1, 3), house(2, 5), house(3, 3)];
	let catalog = Arc::new(MemoryCatalog::with_houses(houses));
	let service = service_with(catalog, Arc::new(MemoryCache::default()));
	let page = parse_page(
		&service.search(&area_request("1", "new")).await.expect("Expected the search to succeed."),
	);

	assert_eq!(house_ids(&page), vec![1, 3]);
	assert_eq!(page.total_page, 1);
}
