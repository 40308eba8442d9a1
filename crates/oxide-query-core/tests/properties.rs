//! Invariants that must hold for every compiled statement.

mod common;

use common::{all_dialects, assert_aligned, compile, generic, postgres};
use oxide_query_core::prelude::*;
use oxide_query_core::{BuildError, SelectStatement, SqlValue};

fn nested_select() -> SelectStatement {
    let mut select = Query::select();
    select
        .column_expr(
            |e| {
                e.round("price", 2);
            },
            Some("price"),
        )
        .from("products")
        .where_("category")
        .is("books")
        .where_group(|g| {
            g.where_("stock")
                .greater_than(0)
                .or_where_group(|inner| {
                    inner.where_("preorder").is(true).and_where("release").like("2025%");
                });
        })
        .and_where("supplier_id")
        .in_select(|q| {
            q.column("id").from("suppliers").where_("country").is("NL");
        })
        .where_not_exists(|q| {
            q.from("recalls")
                .where_("recalls.product_id")
                .is(col("products.id"))
                .and_where("recalls.severity")
                .at_least(3);
        })
        .group_by(&["category"])
        .having_expr(|e| {
            e.count("*");
        })
        .gt(1);
    select
}

#[test]
fn placeholders_match_params_across_nesting() {
    let select = nested_select();
    let (sql, params) = postgres(&select);
    assert_aligned(&sql, &params);
    assert_eq!(
        params,
        vec![
            SqlValue::Int(2),
            SqlValue::Text(String::from("books")),
            SqlValue::Int(0),
            SqlValue::Bool(true),
            SqlValue::Text(String::from("2025%")),
            SqlValue::Text(String::from("NL")),
            SqlValue::Int(3),
            SqlValue::Int(1),
        ]
    );
}

#[test]
fn question_mark_count_matches_params() {
    let select = nested_select();
    for dialect in all_dialects() {
        if dialect.name() == "postgresql" {
            continue;
        }
        let (sql, params) = compile(&select, dialect.as_ref());
        assert_eq!(
            sql.matches('?').count(),
            params.len(),
            "{}: {sql}",
            dialect.name()
        );
    }
}

#[test]
fn first_separator_never_rendered() {
    let mut select = Query::select();
    select
        .from("t")
        .or_where_group(|g| {
            g.or_where("a").is(1).or_where("b").is(2);
        })
        .having_group(|_| {});
    select.or_having("c").eq(3);

    let (sql, _) = generic(&select);
    assert_eq!(
        sql,
        "SELECT * FROM \"t\" WHERE (\"a\" = ? OR \"b\" = ?) HAVING \"c\" = ?"
    );
    assert!(!sql.contains("WHERE OR"));
    assert!(!sql.contains("(OR"));
    assert!(!sql.contains("HAVING OR"));
}

#[test]
fn negation_only_changes_the_keyword() {
    let mut plain = Query::select();
    plain
        .from("t")
        .where_("a")
        .between(1, 2)
        .or_where("b")
        .like("x")
        .or_where("c")
        .is_null();
    plain.or_where("d").in_list([1]).unwrap();

    let mut negated = Query::select();
    negated
        .from("t")
        .where_("a")
        .not_between(1, 2)
        .or_where("b")
        .not_like("x")
        .or_where("c")
        .not_null();
    negated.or_where("d").not_in_list([1]).unwrap();

    let (plain_sql, plain_params) = generic(&plain);
    let (negated_sql, negated_params) = generic(&negated);
    assert_eq!(plain_params, negated_params);
    assert_eq!(
        negated_sql,
        plain_sql
            .replace("BETWEEN", "NOT BETWEEN")
            .replace("LIKE", "NOT LIKE")
            .replace("IS NULL", "IS NOT NULL")
            .replace(" IN (", " NOT IN (")
    );
}

#[test]
fn not_exists_keeps_separator() {
    let mut select = Query::select();
    select.from("a").where_("x").is(1).or_where_not_exists(|q| {
        q.from("b");
    });
    let (sql, _) = generic(&select);
    assert_eq!(
        sql,
        "SELECT * FROM \"a\" WHERE \"x\" = ? OR NOT EXISTS (SELECT * FROM \"b\")"
    );
}

#[test]
fn clones_are_independent() {
    let original = nested_select();
    let (before, _) = generic(&original);

    let mut copy = original.clone();
    copy.and_where("title").like("%rust%").limit(5);
    copy.where_exists(|q| {
        q.from("reviews");
    });

    let (after, _) = generic(&original);
    assert_eq!(before, after);
    assert_ne!(generic(&copy).0, before);
}

#[test]
fn recompile_is_idempotent() {
    let select = nested_select();
    for dialect in all_dialects() {
        let first = compile(&select, dialect.as_ref());
        let second = compile(&select, dialect.as_ref());
        assert_eq!(first, second, "{}", dialect.name());
    }
}

#[test]
fn recompile_after_mutation() {
    let mut select = Query::select();
    select.from("t").where_("a").is(1);
    let (first, _) = generic(&select);

    select.and_where("b").is(2);
    let (second, params) = generic(&select);
    assert_ne!(first, second);
    assert_eq!(params.len(), 2);
}

#[test]
fn insert_column_lock_in() {
    let mut insert = Query::insert();
    insert
        .into_table("t")
        .insert([("a", 1), ("b", 2)])
        .insert([("b", 3)]);

    let (sql, params) = generic(&insert);
    assert_eq!(sql, "INSERT INTO \"t\" (\"a\", \"b\") VALUES (?, ?), (?, ?)");
    assert_eq!(
        params,
        vec![
            SqlValue::Int(1),
            SqlValue::Int(2),
            SqlValue::Null,
            SqlValue::Int(3)
        ]
    );
}

#[test]
fn empty_in_list_is_an_error() {
    let mut select = Query::select();
    let err = select
        .from("t")
        .where_("id")
        .in_list(Vec::<i64>::new())
        .unwrap_err();
    assert_eq!(err, BuildError::EmptyInList { clause: "WHERE" });
    assert_eq!(generic(&select).0, "SELECT * FROM \"t\"");
}
