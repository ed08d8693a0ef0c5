use keyset_core::{
   Error, MemorySource, Page, Paginator, Record, RecordId, SortKey, StrategyRegistry,
};

fn paginator() -> Paginator {
   let registry = StrategyRegistry::builder()
      .strategy("age_asc", vec![SortKey::asc("age")])
      .strategy("age_desc", vec![SortKey::desc("age")])
      .strategy("grade_asc_age_desc", vec![
         SortKey::asc("grade"),
         SortKey::desc("age"),
      ])
      .build()
      .unwrap();
   Paginator::new(registry)
}

/// Seed three students with duplicate ages.
///
/// ```text
/// id | name  | age
/// ---|-------|----
///  1 | ada   | 10
///  2 | brin  | 10
///  3 | cody  | 20
/// ```
fn seed_students() -> MemorySource {
   let mut source = MemorySource::new();
   source.insert(Record::new(1).with_field("name", "ada").with_field("age", 10));
   source.insert(Record::new(2).with_field("name", "brin").with_field("age", 10));
   source.insert(Record::new(3).with_field("name", "cody").with_field("age", 20));
   source
}

/// Extract the record ids from a page for concise assertions.
fn page_ids(page: &Page) -> Vec<RecordId> {
   page.records.iter().map(|r| r.id).collect()
}

/// Walk the whole dataset page by page, feeding each page's cursor into the
/// next fetch, and return the concatenated ids.
async fn walk(source: &MemorySource, strategy: &str, size: usize) -> Vec<RecordId> {
   let paginator = paginator();
   let mut ids = Vec::new();
   let mut cursor = None;

   loop {
      let page = paginator
         .fetch_page(source, strategy, cursor, size)
         .await
         .unwrap();
      ids.extend(page_ids(&page));
      match page.next_cursor {
         Some(next) => cursor = Some(next),
         None => return ids,
      }
   }
}

// ─── Tie-break behavior with duplicate primary values ───

#[tokio::test]
async fn age_asc_walks_duplicates_one_at_a_time() {
   let source = seed_students();
   let paginator = paginator();

   let page1 = paginator
      .fetch_page(&source, "age_asc", None, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page1), vec![1]);

   let page2 = paginator
      .fetch_page(&source, "age_asc", page1.next_cursor, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page2), vec![2]);

   let page3 = paginator
      .fetch_page(&source, "age_asc", page2.next_cursor, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page3), vec![3]);
   assert!(!page3.has_more);
}

#[tokio::test]
async fn age_desc_tie_break_stays_ascending_by_id() {
   let source = seed_students();
   let paginator = paginator();

   // Largest age first.
   let page1 = paginator
      .fetch_page(&source, "age_desc", None, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page1), vec![3]);

   // The duplicate ages come back ascending by id even though the primary
   // sort is descending.
   let page2 = paginator
      .fetch_page(&source, "age_desc", page1.next_cursor, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page2), vec![1]);

   let page3 = paginator
      .fetch_page(&source, "age_desc", page2.next_cursor, 1)
      .await
      .unwrap();
   assert_eq!(page_ids(&page3), vec![2]);
   assert!(!page3.has_more);
}

// ─── Full-walk property ───

#[tokio::test]
async fn full_walk_concatenates_the_dataset_without_gaps_or_duplicates() {
   // Heavier duplicate load: ages 30,30,30,10,10,20,20,30.
   let mut source = MemorySource::new();
   for (id, age) in [(1, 30), (2, 30), (3, 30), (4, 10), (5, 10), (6, 20), (7, 20), (8, 30)] {
      source.insert(Record::new(id).with_field("age", age));
   }

   for size in 1..=4 {
      let asc = walk(&source, "age_asc", size).await;
      assert_eq!(asc, vec![4, 5, 6, 7, 1, 2, 3, 8], "asc walk, size {size}");

      let desc = walk(&source, "age_desc", size).await;
      assert_eq!(desc, vec![1, 2, 3, 8, 6, 7, 4, 5], "desc walk, size {size}");
   }
}

#[tokio::test]
async fn composite_strategy_walks_all_levels() {
   // grade ASC, age DESC, id ASC.
   let mut source = MemorySource::new();
   for (id, grade, age) in [(1, 1, 10), (2, 2, 10), (3, 1, 20), (4, 2, 10), (5, 1, 10)] {
      source.insert(
         Record::new(id)
            .with_field("grade", grade)
            .with_field("age", age),
      );
   }

   for size in 1..=3 {
      let ids = walk(&source, "grade_asc_age_desc", size).await;
      assert_eq!(ids, vec![3, 1, 5, 2, 4], "size {size}");
   }
}

// ─── Error surfaces ───

#[tokio::test]
async fn stale_cursor_fails_instead_of_returning_an_empty_page() {
   let source = seed_students();
   let err = paginator()
      .fetch_page(&source, "age_asc", Some(99), 1)
      .await
      .unwrap_err();
   assert!(matches!(err, Error::InvalidCursor(99)));
   assert_eq!(err.error_code(), "INVALID_CURSOR");
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
   let source = seed_students();
   let err = paginator()
      .fetch_page(&source, "age_asc", None, 0)
      .await
      .unwrap_err();
   assert!(matches!(err, Error::InvalidPageSize));
}

#[tokio::test]
async fn unknown_strategy_is_rejected() {
   let source = seed_students();
   let err = paginator()
      .fetch_page(&source, "name_asc", None, 1)
      .await
      .unwrap_err();
   assert!(matches!(err, Error::UnknownStrategy(_)));
}

// ─── Idempotence ───

#[tokio::test]
async fn identical_fetches_return_identical_pages() {
   let source = seed_students();
   let paginator = paginator();

   let first = paginator
      .fetch_page(&source, "age_desc", Some(3), 2)
      .await
      .unwrap();
   let second = paginator
      .fetch_page(&source, "age_desc", Some(3), 2)
      .await
      .unwrap();

   assert_eq!(first.records, second.records);
   assert_eq!(first.next_cursor, second.next_cursor);
   assert_eq!(first.has_more, second.has_more);
}

// ─── End-of-data signaling ───

#[tokio::test]
async fn short_page_signals_end_of_data() {
   let source = seed_students();
   let page = paginator()
      .fetch_page(&source, "age_asc", Some(1), 5)
      .await
      .unwrap();

   assert_eq!(page_ids(&page), vec![2, 3]);
   assert_eq!(page.next_cursor, None);
   assert!(!page.has_more);
}
