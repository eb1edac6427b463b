//! Failed-initialization memoization over the public API.
//!
//! Initialization runs at most once per process, so the failure outcome is
//! part of what repeated calls share. This lives in its own test binary to
//! keep its process free of the successful-lifecycle state.

use envmerge::{Candidate, Candidates, ConfigError, load_config};

#[tokio::test]
async fn failed_initialization_is_shared_across_calls() {
    // SAFETY: single-threaded at this point; no other test runs in this
    // binary.
    unsafe {
        std::env::set_var("ENVMERGE_DISABLE_DOTENV", "1");
    }

    let mut overrides = Candidates::new();
    overrides.insert(
        "FAILED_INIT_KEY".to_string(),
        Candidate::lazy(|| anyhow::bail!("produced a non-string value")),
    );

    let first = match load_config(Some(overrides), None).await {
        Err(err) => err,
        Ok(_) => panic!("expected the first call to fail resolution"),
    };
    assert!(
        first.to_string().contains("FAILED_INIT_KEY"),
        "first failure must name the offending key: {first}"
    );

    // A later call must surface the memoized failure, not run a second
    // merge that would succeed without the broken override.
    let second = match load_config(None, None).await {
        Err(err) => err,
        Ok(_) => panic!("expected the second call to share the failure"),
    };
    match second {
        ConfigError::Initialization(ref inner) => {
            assert!(matches!(
                **inner,
                ConfigError::Resolve { ref key, .. } if key == "FAILED_INIT_KEY"
            ));
        }
        other => panic!("expected the memoized initialization failure, got {other}"),
    }
}
