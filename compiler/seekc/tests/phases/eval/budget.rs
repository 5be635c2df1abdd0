use seek_diagnostic::ErrorCode;
use seek_eval::EvalErrorKind;
use seekc::{RunConfig, SeekError, StepBudget};

use crate::common::run_with_budget;

#[test]
fn loop_over_budget_fails_instead_of_truncating() {
    let err = run_with_budget("for 10 do up end", 3).unwrap_err();
    let SeekError::Eval(eval_err) = &err else {
        panic!("expected an eval error, got {err:?}");
    };
    assert_eq!(eval_err.kind, EvalErrorKind::BudgetExceeded { limit: 3 });
    assert_eq!(err.code(), ErrorCode::E2005);
}

#[test]
fn loop_header_and_body_statements_are_charged() {
    // One `for` header plus three body statements.
    assert_eq!(run_with_budget("for 3 do up end", 4).unwrap().len(), 3);
    assert!(run_with_budget("for 3 do up end", 3).is_err());
}

#[test]
fn huge_loop_with_empty_body_terminates() {
    assert!(run_with_budget("for 9223372036854775807 do end", 1)
        .unwrap()
        .is_empty());
}

#[test]
fn huge_loop_with_body_hits_budget() {
    let err = run_with_budget("for 1000000000 do up end", 1000).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2005);
}

#[test]
fn default_config_uses_default_budget() {
    assert_eq!(RunConfig::default().step_budget, StepBudget::DEFAULT);
    assert_eq!(StepBudget::DEFAULT.limit(), 10_000);
    assert!(StepBudget::new(0).is_none());
}
