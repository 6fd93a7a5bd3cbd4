// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Comment text at the full pool size, checked against the published TPC-H
//! generator output.

mod common;

use once_cell::sync::Lazy;
use reifydb_connector_tpch::{TpchConfig, TpchConnector};
use reifydb_testing::columns::{int8s, utf8s};
use reifydb_tpch::TextPool;

static CONNECTOR: Lazy<TpchConnector> = Lazy::new(|| {
	reifydb_testing::tracing::init();
	let config = TpchConfig::builder().text_pool_size(TextPool::DEFAULT_SIZE).split_count(1).build().unwrap();
	TpchConnector::new("tpch", config).unwrap()
});

fn comments(table: &str, columns: &[&str], end: u64) -> reifydb_core::Columns {
	let connector = &*CONNECTOR;
	let handle = connector.table_handle(table, 1.0).unwrap();
	common::range(&common::scan(connector, table, 1.0, columns), &handle, 0, end)
}

#[test]
fn test_supplier_comments() {
	let suppliers = comments("supplier", &["s_comment"], 2);
	assert_eq!(utf8s(&suppliers, "s_comment"), ["each slyly above the careful", " slyly bold instructions. idle dependen"]);
}

#[test]
fn test_part_comment() {
	let part = comments("part", &["p_comment"], 1);
	assert_eq!(utf8s(&part, "p_comment"), ["ly. slyly ironi"]);
}

#[test]
fn test_customer_comment() {
	let customer = comments("customer", &["c_comment"], 1);
	assert_eq!(utf8s(&customer, "c_comment"), ["to the even, regular platelets. regular, ironic epitaphs nag e"]);
}

#[test]
fn test_partsupp_comment() {
	let partsupp = comments("partsupp", &["ps_suppkey", "ps_comment"], 1);
	assert_eq!(int8s(&partsupp, "ps_suppkey"), [2]);
	assert_eq!(
		utf8s(&partsupp, "ps_comment"),
		[", even theodolites. regular, final theodolites eat after the carefully pending foxes. furiously regular \
		  deposits sleep slyly. carefully bold realms above the ironic dependencies haggle careful"]
	);
}

#[test]
fn test_order_comments() {
	let orders = comments("orders", &["o_comment"], 2);
	assert_eq!(
		utf8s(&orders, "o_comment"),
		["nstructions sleep furiously among ", " foxes. pending accounts at the pending, silent asymptot"]
	);
}

#[test]
fn test_line_item_comments() {
	let lines = comments("lineitem", &["l_comment"], 2);
	assert_eq!(utf8s(&lines, "l_comment"), ["egular courts above the", "ly final dependencies: slyly bold "]);
}
