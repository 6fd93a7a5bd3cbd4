// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Rows checked against the published TPC-H generator output.

mod common;

use std::str::FromStr;

use bigdecimal::BigDecimal;
use reifydb_core::Columns;
use reifydb_testing::columns::{dates, decimals, int8s, utf8s};
use reifydb_type::{Date, Decimal};

fn rows(table: &str, scale: f64, columns: &[&str], end: u64) -> Columns {
	let connector = common::connector(1);
	let handle = connector.table_handle(table, scale).unwrap();
	common::range(&common::scan(&connector, table, scale, columns), &handle, 0, end)
}

fn money(cents: i64) -> BigDecimal {
	Decimal::new(cents, 2).to_big_decimal()
}

fn date(text: &str) -> Date {
	let parts: Vec<u32> = text.split('-').map(|p| p.parse().unwrap()).collect();
	Date::new(parts[0] as i32, parts[1], parts[2]).unwrap()
}

#[test]
fn test_first_five_nations() {
	let nations = rows("nation", 1.0, &["n_name"], 5);
	assert_eq!(utf8s(&nations, "n_name"), ["ALGERIA", "ARGENTINA", "BRAZIL", "CANADA", "EGYPT"]);
}

#[test]
fn test_first_five_nation_keys_and_comments() {
	let nations = rows("nation", 1.0, &["n_nationkey", "n_regionkey", "n_comment"], 5);
	assert_eq!(int8s(&nations, "n_nationkey"), [0, 1, 2, 3, 4]);
	assert_eq!(int8s(&nations, "n_regionkey"), [0, 1, 1, 1, 4]);
	assert_eq!(
		utf8s(&nations, "n_comment"),
		[
			" haggle. carefully final deposits detect slyly agai",
			"al foxes promise slyly according to the regular accounts. bold requests alon",
			"y alongside of the pending deposits. carefully special packages are about the ironic forges. slyly special ",
			"eas hang ironic, silent packages. slyly regular packages are furiously over the tithes. fluffily bold",
			"y above the carefully unusual theodolites. final dugouts are quickly across the furiously regular d",
		]
	);
}

#[test]
fn test_each_region_has_five_nations() {
	let nations = rows("nation", 1.0, &["n_regionkey"], 25);
	let regions = rows("region", 1.0, &["r_regionkey", "r_name"], 5);
	assert_eq!(utf8s(&regions, "r_name"), ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"]);
	for region in int8s(&regions, "r_regionkey") {
		let members = int8s(&nations, "n_regionkey").into_iter().filter(|r| *r == region).count();
		assert_eq!(members, 5, "region {}", region);
	}
}

#[test]
fn test_part_one() {
	let part = rows(
		"part",
		1.0,
		&["p_partkey", "p_name", "p_mfgr", "p_brand", "p_type", "p_size", "p_container", "p_retailprice"],
		1,
	);
	assert_eq!(int8s(&part, "p_partkey"), [1]);
	assert_eq!(utf8s(&part, "p_name"), ["goldenrod lavender spring chocolate lace"]);
	assert_eq!(utf8s(&part, "p_mfgr"), ["Manufacturer#1"]);
	assert_eq!(utf8s(&part, "p_brand"), ["Brand#13"]);
	assert_eq!(utf8s(&part, "p_type"), ["PROMO BURNISHED COPPER"]);
	assert_eq!(int8s(&part, "p_size"), [7]);
	assert_eq!(utf8s(&part, "p_container"), ["JUMBO PKG"]);
	assert_eq!(money(decimals(&part, "p_retailprice")[0]), BigDecimal::from_str("901.00").unwrap());
}

#[test]
fn test_supplier_one() {
	let supplier = rows(
		"supplier",
		1.0,
		&["s_suppkey", "s_name", "s_address", "s_nationkey", "s_phone", "s_acctbal"],
		1,
	);
	assert_eq!(utf8s(&supplier, "s_name"), ["Supplier#000000001"]);
	assert_eq!(utf8s(&supplier, "s_address"), [" N kD4on9OM Ipw3,gf0JBoQDd7tgrzrddZ"]);
	assert_eq!(int8s(&supplier, "s_nationkey"), [17]);
	assert_eq!(utf8s(&supplier, "s_phone"), ["27-918-335-1736"]);
	assert_eq!(money(decimals(&supplier, "s_acctbal")[0]), BigDecimal::from_str("5755.94").unwrap());
}

#[test]
fn test_customer_one() {
	let customer = rows(
		"customer",
		1.0,
		&["c_name", "c_address", "c_nationkey", "c_phone", "c_acctbal", "c_mktsegment"],
		1,
	);
	assert_eq!(utf8s(&customer, "c_name"), ["Customer#000000001"]);
	assert_eq!(utf8s(&customer, "c_address"), ["IVhzIApeRb ot,c,E"]);
	assert_eq!(int8s(&customer, "c_nationkey"), [15]);
	assert_eq!(utf8s(&customer, "c_phone"), ["25-989-741-2988"]);
	assert_eq!(money(decimals(&customer, "c_acctbal")[0]), BigDecimal::from_str("711.56").unwrap());
	assert_eq!(utf8s(&customer, "c_mktsegment"), ["BUILDING"]);
}

#[test]
fn test_partsupp_of_part_one() {
	let partsupp = rows("partsupp", 1.0, &["ps_partkey", "ps_suppkey", "ps_availqty", "ps_supplycost"], 4);
	assert_eq!(int8s(&partsupp, "ps_partkey"), [1, 1, 1, 1]);
	assert_eq!(int8s(&partsupp, "ps_suppkey"), [2, 2502, 5002, 7502]);
	assert_eq!(int8s(&partsupp, "ps_availqty"), [3325, 8076, 3956, 4069]);
	assert_eq!(decimals(&partsupp, "ps_supplycost"), [77_164, 99_349, 33_709, 35_784]);
}

#[test]
fn test_order_one() {
	let orders = rows(
		"orders",
		1.0,
		&[
			"o_orderkey",
			"o_custkey",
			"o_orderstatus",
			"o_totalprice",
			"o_orderdate",
			"o_orderpriority",
			"o_clerk",
			"o_shippriority",
		],
		1,
	);
	assert_eq!(int8s(&orders, "o_orderkey"), [1]);
	assert_eq!(int8s(&orders, "o_custkey"), [36901]);
	assert_eq!(utf8s(&orders, "o_orderstatus"), ["O"]);
	assert_eq!(money(decimals(&orders, "o_totalprice")[0]), BigDecimal::from_str("173665.47").unwrap());
	assert_eq!(dates(&orders, "o_orderdate"), [date("1996-01-02")]);
	assert_eq!(utf8s(&orders, "o_orderpriority"), ["5-LOW"]);
	assert_eq!(utf8s(&orders, "o_clerk"), ["Clerk#000000951"]);
	assert_eq!(int8s(&orders, "o_shippriority"), [0]);
}

#[test]
fn test_order_one_at_small_scale() {
	let orders = rows("orders", 0.001, &["o_custkey", "o_totalprice"], 1);
	assert_eq!(int8s(&orders, "o_custkey"), [37]);
	assert_eq!(money(decimals(&orders, "o_totalprice")[0]), BigDecimal::from_str("131251.81").unwrap());
}

#[test]
fn test_lines_of_order_one() {
	let columns = [
		"l_orderkey",
		"l_partkey",
		"l_suppkey",
		"l_linenumber",
		"l_quantity",
		"l_extendedprice",
		"l_discount",
		"l_tax",
		"l_returnflag",
		"l_linestatus",
		"l_shipdate",
		"l_commitdate",
		"l_receiptdate",
		"l_shipinstruct",
		"l_shipmode",
	];
	let lines = rows("lineitem", 1.0, &columns, 6);

	assert_eq!(int8s(&lines, "l_orderkey"), [1; 6]);
	assert_eq!(int8s(&lines, "l_partkey"), [155190, 67310, 63700, 2132, 24027, 15635]);
	assert_eq!(int8s(&lines, "l_suppkey"), [7706, 7311, 3701, 4633, 1534, 638]);
	assert_eq!(int8s(&lines, "l_linenumber"), [1, 2, 3, 4, 5, 6]);
	assert_eq!(decimals(&lines, "l_quantity"), [1700, 3600, 800, 2800, 2400, 3200]);
	assert_eq!(
		decimals(&lines, "l_extendedprice"),
		[2_116_823, 4_598_316, 1_330_960, 2_895_564, 2_282_448, 4_962_016]
	);
	assert_eq!(decimals(&lines, "l_discount"), [4, 9, 10, 9, 10, 7]);
	assert_eq!(decimals(&lines, "l_tax"), [2, 6, 2, 6, 4, 2]);
	assert_eq!(utf8s(&lines, "l_returnflag"), ["N"; 6]);
	assert_eq!(utf8s(&lines, "l_linestatus"), ["O"; 6]);
	assert_eq!(
		dates(&lines, "l_shipdate"),
		["1996-03-13", "1996-04-12", "1996-01-29", "1996-04-21", "1996-03-30", "1996-01-30"].map(date)
	);
	assert_eq!(
		dates(&lines, "l_commitdate"),
		["1996-02-12", "1996-02-28", "1996-03-05", "1996-03-30", "1996-03-14", "1996-02-07"].map(date)
	);
	assert_eq!(
		dates(&lines, "l_receiptdate"),
		["1996-03-22", "1996-04-20", "1996-01-31", "1996-05-16", "1996-04-01", "1996-02-03"].map(date)
	);
	assert_eq!(
		utf8s(&lines, "l_shipinstruct"),
		["DELIVER IN PERSON", "TAKE BACK RETURN", "TAKE BACK RETURN", "NONE", "NONE", "DELIVER IN PERSON"]
	);
	assert_eq!(utf8s(&lines, "l_shipmode"), ["TRUCK", "MAIL", "REG AIR", "AIR", "FOB", "MAIL"]);
}

#[test]
fn test_returned_lines_of_order_three() {
	let connector = common::connector(1);
	let handle = connector.table_handle("lineitem", 1.0).unwrap();
	let scan = common::scan(&connector, "lineitem", 1.0, &["l_orderkey", "l_returnflag", "l_linestatus"]);
	let lines = common::range(&scan, &handle, 7, 13);
	assert_eq!(int8s(&lines, "l_orderkey"), [3; 6]);
	assert_eq!(utf8s(&lines, "l_returnflag"), ["R", "R", "A", "A", "R", "A"]);
	assert_eq!(utf8s(&lines, "l_linestatus"), ["F"; 6]);
}
