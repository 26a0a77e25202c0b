//! End-to-end resolution against real temporary repositories.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bot_config::{Resolver, Value};
use bot_env::FakeEnv;
use bot_git::GitCli;
use bot_test_utils::git;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

fn resolver_in(dir: &Path) -> Resolver<FakeEnv, GitCli> {
    Resolver::new(FakeEnv::new(), GitCli::in_dir(dir))
}

#[test]
fn resolves_repository_metadata_from_a_real_repo() {
    let temp = TempDir::new().unwrap();
    git::repo_with_commit(temp.path());
    let r = resolver_in(temp.path());

    let root = r.repo_root().unwrap();
    assert_eq!(
        Path::new(&root).canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );

    assert_eq!(r.branch().unwrap(), "main");

    let revision = r.revision().unwrap();
    assert_eq!(revision.len(), 40);
    assert!(revision.chars().all(|c| c.is_ascii_hexdigit()));

    // No tag yet: describe --always falls back to an abbreviated hash
    let version = r.version().unwrap();
    assert!(revision.starts_with(&version));

    git::tag(temp.path(), "v1.0");
    assert_eq!(r.tag_name().unwrap(), "v1.0");
    assert_eq!(r.version().unwrap(), "v1.0");
}

#[test]
fn resolves_the_project_chain_from_the_origin_url() {
    let temp = TempDir::new().unwrap();
    git::repo_with_commit(temp.path());
    git::set_origin(temp.path(), "https://github.com/acme/widget.git");
    let r = resolver_in(temp.path());

    assert_eq!(
        r.remote_origin_url().unwrap(),
        "https://github.com/acme/widget.git"
    );
    assert_eq!(r.reponame().unwrap(), "acme/widget");
    assert_eq!(r.project_name().unwrap(), "widget");

    let root = r.repo_root().unwrap();
    assert_eq!(r.project_path().unwrap(), Path::new(&root).join("widget"));
    assert_eq!(r.test_path().unwrap(), Path::new(&root).join("tests"));
}

#[test]
fn project_name_is_stable_across_repeated_reads() {
    let temp = TempDir::new().unwrap();
    git::repo_with_commit(temp.path());
    git::set_origin(temp.path(), "https://github.com/acme/widget.git");
    let r = resolver_in(temp.path());

    // Nothing is cached, so both reads run the full chain
    assert_eq!(r.project_name().unwrap(), r.project_name().unwrap());
}

#[test]
fn repo_without_submodules_yields_an_empty_status_map() {
    let temp = TempDir::new().unwrap();
    git::repo_with_commit(temp.path());
    let r = resolver_in(temp.path());

    assert!(r.submodule_status().is_empty());
}

#[test]
fn dynamic_get_matches_the_typed_accessors() {
    let temp = TempDir::new().unwrap();
    git::repo_with_commit(temp.path());
    let r = Resolver::new(
        FakeEnv::new().with("MY_CUSTOM_FLAG", "42"),
        GitCli::in_dir(temp.path()),
    );

    let revision = r.revision().unwrap();
    assert_eq!(r.get("BOT_REVISION").unwrap(), Value::Str(revision));
    assert_eq!(r.get("BOT_PORT").unwrap(), Value::Int(5000));
    assert_eq!(r.get("MY_CUSTOM_FLAG").unwrap(), Value::Int(42));
}

/// Counts error-level events so tests can assert on failure telemetry.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn git_failure_outside_a_repo_logs_one_error_and_degrades() {
    let temp = TempDir::new().unwrap();
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());

    tracing::subscriber::with_default(subscriber, || {
        let r = resolver_in(temp.path());
        // One failed invocation, one degraded property, no panic
        assert_eq!(r.repo_root(), None);
    });

    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
}
