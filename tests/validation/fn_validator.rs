use validator_rail::{validator_fn, FnValidator, ValidationOutcome, ValidationResult, Validator};

fn even() -> FnValidator<impl Fn(&u32, Option<&()>) -> ValidationOutcome<u32> + Send + Sync> {
    validator_fn("even", |n: &u32, _: Option<&()>| -> ValidationOutcome<u32> {
        let result = ValidationResult::new(*n);
        Ok(if n % 2 == 0 { result } else { result.with_message("%value% is odd").with_variable("value", *n) })
    })
}

#[test]
fn closure_validator_reports_findings() {
    let validator = even();

    assert!(Validator::<u32>::validate(&validator, &4, None).unwrap().is_valid());
    assert_eq!(Validator::<u32>::validate(&validator, &3, None).unwrap().to_string(), "3 is odd");
}

#[test]
fn closure_validator_uses_given_name() {
    let validator = even();
    assert_eq!(Validator::<u32>::name(&validator), "even");
    assert!(format!("{:?}", validator).contains("even"));
}
