//! Pool store integration tests against a scratch SQLite database

use choquiz_common::db::{init_database, PoolStore, QuizEntry};
use tempfile::TempDir;

fn entry(word: &str, question: &[&str], hint: &str) -> QuizEntry {
    QuizEntry {
        word: word.to_string(),
        question: question.iter().map(|g| g.to_string()).collect(),
        hint: hint.to_string(),
        added_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

async fn scratch_store() -> (TempDir, PoolStore) {
    let dir = TempDir::new().expect("temp dir");
    let pool = init_database(&dir.path().join("choquiz.db"))
        .await
        .expect("init database");
    (dir, PoolStore::new(pool))
}

#[tokio::test]
async fn put_then_find_by_word() {
    let (_dir, store) = scratch_store().await;

    assert!(!store.find_by_word("사랑").await.unwrap());

    store
        .put("사랑_1", &entry("사랑", &["ㅅ", "ㄹ"], "깊은 애정"))
        .await
        .unwrap();

    assert!(store.find_by_word("사랑").await.unwrap());
}

#[tokio::test]
async fn find_by_word_is_exact_not_substring() {
    let (_dir, store) = scratch_store().await;

    store
        .put("사랑_1", &entry("사랑", &["ㅅ", "ㄹ"], "깊은 애정"))
        .await
        .unwrap();

    assert!(!store.find_by_word("사").await.unwrap());
    assert!(!store.find_by_word("사랑니").await.unwrap());
}

#[tokio::test]
async fn read_all_roundtrips_question_glyphs() {
    let (_dir, store) = scratch_store().await;

    let first = entry("사랑", &["ㅅ", "ㄹ"], "깊은 애정");
    let second = entry("하늘", &["ㅎ", "ㄴ"], "지평선 위의 공간");
    store.put("사랑_1", &first).await.unwrap();
    store.put("하늘_2", &second).await.unwrap();

    let all = store.read_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}

#[tokio::test]
async fn read_all_on_empty_store_is_empty() {
    let (_dir, store) = scratch_store().await;
    assert!(store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_removes_everything() {
    let (_dir, store) = scratch_store().await;

    store
        .put("사랑_1", &entry("사랑", &["ㅅ", "ㄹ"], "깊은 애정"))
        .await
        .unwrap();
    store
        .put("하늘_2", &entry("하늘", &["ㅎ", "ㄴ"], "지평선 위의 공간"))
        .await
        .unwrap();

    store.clear().await.unwrap();

    assert!(store.read_all().await.unwrap().is_empty());
    assert!(!store.find_by_word("사랑").await.unwrap());
}

#[tokio::test]
async fn duplicate_key_is_rejected() {
    let (_dir, store) = scratch_store().await;

    let item = entry("사랑", &["ㅅ", "ㄹ"], "깊은 애정");
    store.put("사랑_1", &item).await.unwrap();

    // Same key again must fail; the same word under a new key is allowed
    assert!(store.put("사랑_1", &item).await.is_err());
    assert!(store.put("사랑_2", &item).await.is_ok());
}

#[tokio::test]
async fn make_key_embeds_the_word() {
    let key = PoolStore::make_key("사랑");
    assert!(key.starts_with("사랑_"));
    assert!(key.len() > "사랑_".len());
}
