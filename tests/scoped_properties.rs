//! Property-based tests for the scoped open/use/close contract.

use proptest::prelude::*;

use mooring::testing::MockResource;
use mooring::{OpenClose, OpenGuard, UseError};

fn mock_with(fail_open: bool, fail_close: bool) -> MockResource {
    let mut mock = MockResource::new();
    if fail_open {
        mock = mock.with_failing_open();
    }
    if fail_close {
        mock = mock.with_failing_close();
    }
    mock
}

proptest! {
    #[test]
    fn prop_open_and_close_run_exactly_once(
        fail_open in any::<bool>(),
        fail_body in any::<bool>(),
        fail_close in any::<bool>(),
    ) {
        let mut mock = mock_with(fail_open, fail_close);
        let mut body_ran = false;

        let result = mock.use_with(|_| {
            body_ran = true;
            if fail_body {
                Err("body failed".to_string())
            } else {
                Ok(())
            }
        });

        prop_assert_eq!(mock.opens, 1);
        prop_assert_eq!(mock.closes, 1);
        prop_assert!(!mock.is_open);
        prop_assert_eq!(body_ran, !fail_open, "body runs exactly when open succeeds");

        // The primary outcome is never affected by the close outcome.
        match (fail_open, fail_body) {
            (true, _) => prop_assert_eq!(result, Err("open failed".to_string())),
            (false, true) => prop_assert_eq!(result, Err("body failed".to_string())),
            (false, false) => prop_assert_eq!(result, Ok(())),
        }
    }

    #[test]
    fn prop_try_use_with_identifies_the_failing_phase(
        fail_open in any::<bool>(),
        fail_body in any::<bool>(),
        fail_close in any::<bool>(),
    ) {
        let mut mock = mock_with(fail_open, fail_close);

        let result = mock.try_use_with(|_| {
            if fail_body {
                Err("body failed".to_string())
            } else {
                Ok(())
            }
        });

        prop_assert_eq!(mock.opens, 1);
        prop_assert_eq!(mock.closes, 1);

        match (fail_open, fail_body, fail_close) {
            (true, _, _) => {
                prop_assert!(matches!(result, Err(UseError::Open(_))));
            }
            (false, false, false) => prop_assert!(result.is_ok()),
            (false, true, false) => {
                prop_assert!(matches!(result, Err(UseError::Body(_))));
            }
            (false, false, true) => {
                prop_assert!(matches!(result, Err(UseError::Close(_))));
            }
            (false, true, true) => {
                prop_assert!(
                    matches!(result, Err(UseError::Both { .. })),
                    "expected Err(UseError::Both {{ .. }})"
                );
            }
        }
    }

    #[test]
    fn prop_repeated_calls_open_and_close_independently(calls in 1usize..20) {
        let mut mock = MockResource::new();

        for i in 0..calls {
            let result = mock.use_with(|m| Ok(m.opens));
            prop_assert_eq!(result, Ok(i + 1));
        }

        prop_assert_eq!(mock.opens, calls);
        prop_assert_eq!(mock.closes, calls);
        prop_assert!(!mock.is_open);
    }

    #[test]
    fn prop_guard_and_use_with_agree_on_counts(
        fail_open in any::<bool>(),
        fail_close in any::<bool>(),
    ) {
        let mut via_helper = mock_with(fail_open, fail_close);
        let _ = via_helper.use_with(|_| Ok(()));

        let mut via_guard = mock_with(fail_open, fail_close);
        if let Ok(guard) = OpenGuard::open(&mut via_guard) {
            drop(guard);
        }

        prop_assert_eq!(via_helper.opens, via_guard.opens);
        prop_assert_eq!(via_helper.closes, via_guard.closes);
        prop_assert_eq!(via_helper.is_open, via_guard.is_open);
    }
}
