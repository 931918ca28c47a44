mod common;

use std::{sync::Arc, time::Duration};

use common::{create_test_archive, hit, MockCompletion, MockSearch};
use lookout_core::{
    DigestConfig, ExecutionError, LookoutError, Plan, ReportSynthesizer, SearchConfig,
    SearchExecutor, SynthesisError, Watchdog,
};

fn watch_plan() -> Plan {
    Plan {
        project_name: "Market Watch".to_string(),
        targets: vec!["recruiting".to_string(), "sales".to_string()],
        keywords: vec!["ATS".to_string()],
        instruction: "Track tooling complaints".to_string(),
    }
}

fn watch_config() -> SearchConfig {
    SearchConfig {
        polite_delay: Duration::ZERO,
        ..SearchConfig::watch()
    }
}

#[tokio::test]
async fn test_scan_stores_new_items_once() {
    let (_temp_dir, archive) = create_test_archive().await;
    let search = Arc::new(
        MockSearch::new()
            .with_hits("recruiting", vec![hit("a", 0), hit("b", 6)])
            .with_hits("sales", vec![hit("c", 1)]),
    );
    let executor = SearchExecutor::new(search);
    let watchdog = Watchdog::new(archive.clone());

    let first = watchdog
        .scan(&executor, &watch_plan(), &watch_config())
        .await
        .expect("first scan");
    assert_eq!(first.fetched, 3);
    assert_eq!(first.inserted, 3);
    assert_eq!(first.write_failures, 0);

    let second = watchdog
        .scan(&executor, &watch_plan(), &watch_config())
        .await
        .expect("second scan");
    assert_eq!(second.fetched, 3);
    assert_eq!(second.inserted, 0);

    let stats = archive.stats(2).await.expect("stats");
    assert_eq!(stats.total, 3);
    assert_eq!(stats.hot, 1);
}

#[tokio::test]
async fn test_scan_records_failed_targets() {
    let (_temp_dir, archive) = create_test_archive().await;
    let search = Arc::new(
        MockSearch::new()
            .failing("recruiting", 429)
            .with_hits("sales", vec![hit("c", 4)]),
    );
    let watchdog = Watchdog::new(archive);

    let summary = watchdog
        .scan(&SearchExecutor::new(search), &watch_plan(), &watch_config())
        .await
        .expect("scan");

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.failed_targets.len(), 1);
    assert!(summary.failed_targets[0].to_string().contains("recruiting"));
}

#[tokio::test]
async fn test_scan_with_nothing_found_is_not_an_error() {
    let (_temp_dir, archive) = create_test_archive().await;
    let watchdog = Watchdog::new(archive);
    let executor = SearchExecutor::new(Arc::new(MockSearch::new()));

    let summary = watchdog
        .scan(&executor, &watch_plan(), &watch_config())
        .await
        .expect("scan");

    assert_eq!(summary.fetched, 0);
    assert_eq!(summary.inserted, 0);
}

#[tokio::test]
async fn test_digest_on_empty_store() {
    let (_temp_dir, archive) = create_test_archive().await;
    let completion = Arc::new(MockCompletion::new().answer("unused"));
    let synthesizer = ReportSynthesizer::new(completion.clone());
    let watchdog = Watchdog::new(archive);

    let err = watchdog
        .digest(&synthesizer, &DigestConfig::default(), "gpt-4o-mini")
        .await
        .expect_err("empty window");

    assert!(matches!(
        err,
        LookoutError::Execution(ExecutionError::NoDataCollected)
    ));
    assert!(completion.requests().is_empty());
}

#[tokio::test]
async fn test_digest_puts_hot_items_first() {
    let (_temp_dir, archive) = create_test_archive().await;
    let search = Arc::new(
        MockSearch::new()
            .with_hits("recruiting", vec![hit("cold", 0), hit("warm", 3)])
            .with_hits("sales", vec![hit("hot", 12)]),
    );
    let completion = Arc::new(MockCompletion::new().answer("# Daily Brief"));
    let synthesizer = ReportSynthesizer::new(completion.clone());
    let watchdog = Watchdog::new(archive);

    watchdog
        .scan(&SearchExecutor::new(search), &watch_plan(), &watch_config())
        .await
        .expect("scan");
    let report = watchdog
        .digest(&synthesizer, &DigestConfig::default(), "gpt-4o-mini")
        .await
        .expect("digest");

    assert_eq!(report.markdown(), "# Daily Brief");

    let requests = completion.requests();
    assert_eq!(requests.len(), 1);
    let user = &requests[0].user;
    let hot = user.find("Post hot").expect("hot item in digest");
    let warm = user.find("Post warm").expect("warm item in digest");
    let cold = user.find("Post cold").expect("low-heat allowance");
    assert!(hot < warm && warm < cold);
    assert!(requests[0].system.contains("Market Watch"));
}

#[tokio::test]
async fn test_digest_failure_is_upstream() {
    let (_temp_dir, archive) = create_test_archive().await;
    let search = Arc::new(MockSearch::new().with_hits("sales", vec![hit("p", 3)]));
    let completion = Arc::new(MockCompletion::new().fail(401, "bad key"));
    let synthesizer = ReportSynthesizer::new(completion);
    let watchdog = Watchdog::new(archive);

    watchdog
        .scan(&SearchExecutor::new(search), &watch_plan(), &watch_config())
        .await
        .expect("scan");
    let err = watchdog
        .digest(&synthesizer, &DigestConfig::default(), "gpt-4o-mini")
        .await
        .expect_err("model call fails");

    assert!(matches!(
        err,
        LookoutError::Synthesis(SynthesisError::UpstreamFailure { .. })
    ));
}

#[tokio::test]
async fn test_digest_with_only_cold_items_and_no_allowance() {
    let (_temp_dir, archive) = create_test_archive().await;
    let search = Arc::new(MockSearch::new().with_hits("sales", vec![hit("cold", 0)]));
    let completion = Arc::new(MockCompletion::new().answer("invented brief"));
    let synthesizer = ReportSynthesizer::new(completion.clone());
    let watchdog = Watchdog::new(archive);
    let config = DigestConfig {
        low_heat_allowance: 0,
        ..DigestConfig::default()
    };

    watchdog
        .scan(&SearchExecutor::new(search), &watch_plan(), &watch_config())
        .await
        .expect("scan");
    let err = watchdog
        .digest(&synthesizer, &config, "gpt-4o-mini")
        .await
        .expect_err("nothing selected for the brief");

    assert!(matches!(
        err,
        LookoutError::Execution(ExecutionError::NoDataCollected)
    ));
    assert!(completion.requests().is_empty());
}
