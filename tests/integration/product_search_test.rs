// Product search integration tests.
//
// Run against a real MySQL database (set TEST_DATABASE_URL); each test seeds
// its own marker-tagged rows and cleans them up, so tests can run in
// parallel against a shared database.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rust_decimal_macros::dec;
use shopilent::catalog::repositories::ProductReadRepository;
use shopilent::search::models::ProductFilters;

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn seventeen_products_page_four_of_five_returns_the_last_two() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    for i in 0..17 {
        ProductSeed::new(format!("{} item {:02}", marker, i))
            .insert(&pool)
            .await;
    }

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        page_number: 4,
        page_size: 5,
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.total_count, 17);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.items.len(), 2);
    assert!(!page.has_next_page);
    assert!(page.has_previous_page);

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn category_filter_returns_only_matching_products() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    let electronics_slug = format!("electronics-{}", marker);
    let category = CategorySeed::new("Electronics", electronics_slug.clone())
        .insert(&pool)
        .await;

    let in_a = ProductSeed::new(format!("{} laptop", marker)).insert(&pool).await;
    let in_b = ProductSeed::new(format!("{} phone", marker)).insert(&pool).await;
    let _out = ProductSeed::new(format!("{} sofa", marker)).insert(&pool).await;
    link_product_category(&pool, &in_a, &category).await;
    link_product_category(&pool, &in_b, &category).await;

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        category_slugs: vec![electronics_slug.clone()],
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.total_count, 2);
    assert_eq!(page.items.len(), 2);
    for product in &page.items {
        assert!(
            product.categories.iter().any(|c| c.slug == electronics_slug),
            "product {} missing category entry",
            product.name
        );
    }

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn price_window_returns_only_in_range_items() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    for (i, price) in [dec!(50), dec!(150), dec!(250), dec!(350)].iter().enumerate() {
        ProductSeed::new(format!("{} priced {}", marker, i))
            .price(*price)
            .insert(&pool)
            .await;
    }

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        price_min: Some(dec!(100)),
        price_max: Some(dec!(300)),
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.total_count, 2);
    let mut prices: Vec<_> = page.items.iter().map(|p| p.base_price).collect();
    prices.sort();
    assert_eq!(prices, vec![dec!(150), dec!(250)]);

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn contiguous_pages_concatenate_into_a_sorted_sequence() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    // several equal prices force the tiebreaker to do its job
    for (i, cents) in [500i64, 300, 300, 900, 100, 300, 700, 500, 100, 900]
        .iter()
        .enumerate()
    {
        ProductSeed::new(format!("{} tie {}", marker, i))
            .price(rust_decimal::Decimal::new(*cents, 2))
            .insert(&pool)
            .await;
    }

    let repo = ProductReadRepository::new(pool.clone());
    let mut all_prices = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();
    for page_number in 1..=4 {
        let filters = ProductFilters {
            search_query: marker.clone(),
            sort_by: "price".to_string(),
            page_number,
            page_size: 3,
            ..ProductFilters::default()
        };
        let page = repo.search(&filters).await.unwrap();
        for item in &page.items {
            assert!(seen_ids.insert(item.id.clone()), "row appeared twice across pages");
            all_prices.push(item.base_price);
        }
    }

    assert_eq!(all_prices.len(), 10);
    let mut sorted = all_prices.clone();
    sorted.sort();
    assert_eq!(all_prices, sorted, "concatenated pages must be globally sorted");

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn inactive_and_out_of_stock_products_are_excluded_when_asked() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    ProductSeed::new(format!("{} live", marker)).insert(&pool).await;
    ProductSeed::new(format!("{} hidden", marker))
        .inactive()
        .insert(&pool)
        .await;
    ProductSeed::new(format!("{} empty-shelf", marker))
        .stock(0)
        .insert(&pool)
        .await;

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        in_stock_only: true,
        active_only: true,
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert!(page.items[0].name.contains("live"));

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn malformed_metadata_still_yields_the_product() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    ProductSeed::new(format!("{} broken-meta", marker))
        .metadata_raw("{this is not json")
        .insert(&pool)
        .await;
    ProductSeed::new(format!("{} good-meta", marker))
        .metadata_raw(r#"{"featured":true}"#)
        .insert(&pool)
        .await;

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.items.len(), 2, "bad row must not abort the page");
    let broken = page
        .items
        .iter()
        .find(|p| p.name.contains("broken-meta"))
        .unwrap();
    assert!(broken.metadata.is_empty());
    let good = page.items.iter().find(|p| p.name.contains("good-meta")).unwrap();
    assert_eq!(good.metadata.get("featured"), Some(&serde_json::json!(true)));

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn attribute_filter_matches_on_value() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    let color_name = format!("color-{}", marker);
    let attribute = AttributeSeed::new(color_name.clone()).insert(&pool).await;

    let black = ProductSeed::new(format!("{} black-shirt", marker)).insert(&pool).await;
    let red = ProductSeed::new(format!("{} red-shirt", marker)).insert(&pool).await;
    link_product_attribute(&pool, &black, &attribute, "\"black\"").await;
    link_product_attribute(&pool, &red, &attribute, "\"red\"").await;

    let mut attribute_filters = std::collections::HashMap::new();
    attribute_filters.insert(color_name, vec!["black".to_string()]);

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        attribute_filters,
        ..ProductFilters::default()
    };
    let page = repo.search(&filters).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert!(page.items[0].name.contains("black-shirt"));

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn slug_lookup_returns_the_full_projection() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    let category = CategorySeed::new("Mugs", format!("mugs-{}", marker))
        .insert(&pool)
        .await;
    let seed = ProductSeed::new(format!("{} camp mug", marker)).price(dec!(18.00));
    let slug = seed.slug.clone();
    let id = seed.insert(&pool).await;
    link_product_category(&pool, &id, &category).await;

    let repo = ProductReadRepository::new(pool.clone());
    let product = repo.find_by_slug(&slug).await.unwrap().unwrap();

    assert_eq!(product.id, id);
    assert_eq!(product.base_price, dec!(18.00));
    assert_eq!(product.categories.len(), 1);

    let missing = repo.find_by_slug("no-such-slug").await.unwrap();
    assert!(missing.is_none());

    cleanup_marker(&pool, &marker).await;
}

#[tokio::test]
#[ignore = "requires MySQL (set TEST_DATABASE_URL)"]
async fn facet_counts_reflect_the_filtered_set() {
    let pool = create_test_pool().await;
    setup_schema(&pool).await;
    let marker = test_marker();

    let slug_a = format!("books-{}", marker);
    let slug_b = format!("games-{}", marker);
    let books = CategorySeed::new("Books", slug_a.clone()).insert(&pool).await;
    let games = CategorySeed::new("Games", slug_b.clone()).insert(&pool).await;

    for i in 0..3 {
        let id = ProductSeed::new(format!("{} book {}", marker, i)).insert(&pool).await;
        link_product_category(&pool, &id, &books).await;
    }
    let id = ProductSeed::new(format!("{} game", marker)).insert(&pool).await;
    link_product_category(&pool, &id, &games).await;

    let repo = ProductReadRepository::new(pool.clone());
    let filters = ProductFilters {
        search_query: marker.clone(),
        ..ProductFilters::default()
    };
    let facets = repo.facets(&filters, 50).await.unwrap();

    let book_facet = facets.iter().find(|f| f.slug == slug_a).unwrap();
    assert_eq!(book_facet.product_count, 3);
    let game_facet = facets.iter().find(|f| f.slug == slug_b).unwrap();
    assert_eq!(game_facet.product_count, 1);

    cleanup_marker(&pool, &marker).await;
}
