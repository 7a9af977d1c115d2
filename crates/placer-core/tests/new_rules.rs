use placer_core::{ErrorKind, new_rules};
use placer_model::{
    Constraint, ConstraintOp, LabelConstraints, RoleKind, Rule, same_rule_set, total_count,
};

struct Case {
    name: &'static str,
    input: &'static str,
    replicas: u64,
    expected: Result<Vec<Rule>, ErrorKind>,
}

fn c(key: &str, op: ConstraintOp, value: &str) -> Constraint {
    Constraint::single(key, op, value)
}

fn voter(count: u64, constraints: Vec<Constraint>) -> Rule {
    Rule::new(RoleKind::Voter, count, constraints)
}

fn cases() -> Vec<Case> {
    use ConstraintOp::{In, NotIn};

    vec![
        Case {
            name: "empty constraints",
            input: "",
            replicas: 3,
            expected: Ok(vec![voter(3, vec![])]),
        },
        Case {
            name: "zero replicas",
            input: "",
            replicas: 0,
            expected: Err(ErrorKind::InvalidReplicas),
        },
        Case {
            name: "normal array constraints",
            input: r#"["+zone=sh", "+region=sh"]"#,
            replicas: 3,
            expected: Ok(vec![voter(
                3,
                vec![c("zone", In, "sh"), c("region", In, "sh")],
            )]),
        },
        Case {
            name: "normal object constraints",
            input: r#"{"+zone=sh,-zone=bj":2, "+zone=sh": 1}"#,
            replicas: 3,
            expected: Ok(vec![
                voter(2, vec![c("zone", In, "sh"), c("zone", NotIn, "bj")]),
                voter(1, vec![c("zone", In, "sh")]),
            ]),
        },
        Case {
            name: "normal object constraints, with extra count",
            input: "{'+zone=sh,-zone=bj':2, '+zone=sh': 1}",
            replicas: 4,
            expected: Ok(vec![
                voter(2, vec![c("zone", In, "sh"), c("zone", NotIn, "bj")]),
                voter(1, vec![c("zone", In, "sh")]),
                voter(1, vec![]),
            ]),
        },
        Case {
            name: "normal object constraints, without count",
            input: "{'+zone=sh,-zone=bj':2, '+zone=sh': 1}",
            replicas: 0,
            expected: Ok(vec![
                voter(2, vec![c("zone", In, "sh"), c("zone", NotIn, "bj")]),
                voter(1, vec![c("zone", In, "sh")]),
            ]),
        },
        Case {
            name: "zero count in object constraints",
            input: r#"{"+zone=sh,-zone=bj":0, "+zone=sh": 1}"#,
            replicas: 3,
            expected: Err(ErrorKind::InvalidMapCount),
        },
        Case {
            name: "overlarge total count in object constraints",
            input: r#"{"+ne=sh,-zone=bj":1, "+zone=sh": 4}"#,
            replicas: 3,
            expected: Err(ErrorKind::InvalidReplicas),
        },
        Case {
            name: "invalid array",
            input: r#"["+ne=sh", "+zone=sh""#,
            replicas: 3,
            expected: Err(ErrorKind::InvalidFormat),
        },
        Case {
            name: "invalid array constraints",
            input: r#"["ne=sh", "+zone=sh"]"#,
            replicas: 3,
            expected: Err(ErrorKind::InvalidFormat),
        },
        Case {
            name: "invalid map",
            input: r#"{+ne=sh,-zone=bj:1, "+zone=sh": 4"#,
            replicas: 5,
            expected: Err(ErrorKind::InvalidFormat),
        },
        Case {
            name: "invalid map constraints",
            input: r#"{"nesh,-zone=bj":1, "+zone=sh": 4}"#,
            replicas: 6,
            expected: Err(ErrorKind::InvalidConstraintFormat),
        },
        Case {
            name: "invalid map separator",
            input: "{+region=us-east-2:2}",
            replicas: 6,
            expected: Err(ErrorKind::InvalidMappingSeparator),
        },
        Case {
            name: "repeated key in object constraints",
            input: r#"{"+zone=sh": 1, "+zone=sh": 2}"#,
            replicas: 3,
            expected: Err(ErrorKind::InvalidFormat),
        },
        Case {
            name: "neither array nor map",
            input: "+zone=sh",
            replicas: 3,
            expected: Err(ErrorKind::InvalidFormat),
        },
    ]
}

#[test]
fn new_rules_table() {
    for case in cases() {
        let got = new_rules(RoleKind::Voter, case.replicas, case.input);

        match (&case.expected, got) {
            (Ok(want), Ok(got)) => assert!(
                same_rule_set(want, &got),
                "[{}]\nwant {want:?}\ngot  {got:?}",
                case.name
            ),
            (Err(kind), Err(err)) => {
                assert_eq!(err.kind(), *kind, "[{}] {err}", case.name)
            }
            (want, got) => panic!("[{}]\nwant {want:?}\ngot  {got:?}", case.name),
        }
    }
}

#[test]
fn single_and_double_quotes_are_equivalent() {
    let pairs = [
        (r#"["+zone=sh", "-region=bj"]"#, "['+zone=sh', '-region=bj']"),
        (
            r#"{"+zone=sh,-zone=bj": 2, "+zone=sh": 1}"#,
            "{'+zone=sh,-zone=bj': 2, '+zone=sh': 1}",
        ),
    ];

    for (double, single) in pairs {
        for replicas in [0, 3, 5] {
            let a = new_rules(RoleKind::Voter, replicas, double);
            let b = new_rules(RoleKind::Voter, replicas, single);
            match (a, b) {
                (Ok(a), Ok(b)) => assert!(same_rule_set(&a, &b), "{double} vs {single}"),
                (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
                (a, b) => panic!("diverging results for {double}: {a:?} / {b:?}"),
            }
        }
    }
}

#[test]
fn map_entry_order_does_not_matter() {
    let a = new_rules(RoleKind::Voter, 6, r#"{"+zone=sh": 1, "-zone=bj": 2, "+rack=r1": 1}"#);
    let b = new_rules(RoleKind::Voter, 6, r#"{"+rack=r1": 1, "+zone=sh": 1, "-zone=bj": 2}"#);
    assert!(same_rule_set(&a.unwrap(), &b.unwrap()));
}

#[test]
fn map_sum_is_conserved() {
    let spec = r#"{"+zone=sh": 1, "-zone=bj": 2}"#;

    for replicas in 3..=8 {
        let rules = new_rules(RoleKind::Voter, replicas, spec).unwrap();
        assert_eq!(total_count(&rules), Some(replicas));

        let catch_all: Vec<_> = rules.iter().filter(|r| r.is_catch_all()).collect();
        if replicas == 3 {
            assert!(catch_all.is_empty());
        } else {
            assert_eq!(catch_all.len(), 1);
            assert_eq!(catch_all[0].count, replicas - 3);
        }
    }

    for replicas in 1..3 {
        let err = new_rules(RoleKind::Voter, replicas, spec).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReplicas);
    }
}

#[test]
fn compiled_rules_clone_independently() {
    let rules = new_rules(RoleKind::Voter, 4, "{'+zone=sh,-zone=bj': 2}").unwrap();
    let mut copies = rules.clone();

    for rule in &mut copies {
        rule.label_constraints.push(c("host", ConstraintOp::In, "h1"));
        if let Some(first) = rule.label_constraints.0.first_mut() {
            first.values.push("gz".into());
        }
    }

    assert!(!same_rule_set(&rules, &copies));
    assert!(same_rule_set(
        &rules,
        &[
            voter(
                2,
                vec![c("zone", ConstraintOp::In, "sh"), c("zone", ConstraintOp::NotIn, "bj")]
            ),
            Rule::new(RoleKind::Voter, 2, LabelConstraints::new()),
        ]
    ));
}
