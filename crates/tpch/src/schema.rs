// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use reifydb_type::{Result, Type, return_error};
use serde::{Deserialize, Serialize};

use crate::error::TpchError;

pub const MONEY: Type = Type::Decimal {
	precision: 15,
	scale: 2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
	Nation,
	Region,
	Part,
	Supplier,
	PartSupp,
	Customer,
	Orders,
	LineItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
	pub name: &'static str,
	pub r#type: Type,
}

const fn col(name: &'static str, r#type: Type) -> ColumnDef {
	ColumnDef {
		name,
		r#type,
	}
}

const NATION: [ColumnDef; 4] = [
	col("n_nationkey", Type::Int8),
	col("n_name", Type::Utf8),
	col("n_regionkey", Type::Int8),
	col("n_comment", Type::Utf8),
];

const REGION: [ColumnDef; 3] = [col("r_regionkey", Type::Int8), col("r_name", Type::Utf8), col("r_comment", Type::Utf8)];

const PART: [ColumnDef; 9] = [
	col("p_partkey", Type::Int8),
	col("p_name", Type::Utf8),
	col("p_mfgr", Type::Utf8),
	col("p_brand", Type::Utf8),
	col("p_type", Type::Utf8),
	col("p_size", Type::Int8),
	col("p_container", Type::Utf8),
	col("p_retailprice", MONEY),
	col("p_comment", Type::Utf8),
];

const SUPPLIER: [ColumnDef; 7] = [
	col("s_suppkey", Type::Int8),
	col("s_name", Type::Utf8),
	col("s_address", Type::Utf8),
	col("s_nationkey", Type::Int8),
	col("s_phone", Type::Utf8),
	col("s_acctbal", MONEY),
	col("s_comment", Type::Utf8),
];

const PARTSUPP: [ColumnDef; 5] = [
	col("ps_partkey", Type::Int8),
	col("ps_suppkey", Type::Int8),
	col("ps_availqty", Type::Int8),
	col("ps_supplycost", MONEY),
	col("ps_comment", Type::Utf8),
];

const CUSTOMER: [ColumnDef; 8] = [
	col("c_custkey", Type::Int8),
	col("c_name", Type::Utf8),
	col("c_address", Type::Utf8),
	col("c_nationkey", Type::Int8),
	col("c_phone", Type::Utf8),
	col("c_acctbal", MONEY),
	col("c_mktsegment", Type::Utf8),
	col("c_comment", Type::Utf8),
];

const ORDERS: [ColumnDef; 9] = [
	col("o_orderkey", Type::Int8),
	col("o_custkey", Type::Int8),
	col("o_orderstatus", Type::Utf8),
	col("o_totalprice", MONEY),
	col("o_orderdate", Type::Date),
	col("o_orderpriority", Type::Utf8),
	col("o_clerk", Type::Utf8),
	col("o_shippriority", Type::Int8),
	col("o_comment", Type::Utf8),
];

const LINEITEM: [ColumnDef; 16] = [
	col("l_orderkey", Type::Int8),
	col("l_partkey", Type::Int8),
	col("l_suppkey", Type::Int8),
	col("l_linenumber", Type::Int8),
	col("l_quantity", MONEY),
	col("l_extendedprice", MONEY),
	col("l_discount", MONEY),
	col("l_tax", MONEY),
	col("l_returnflag", Type::Utf8),
	col("l_linestatus", Type::Utf8),
	col("l_shipdate", Type::Date),
	col("l_commitdate", Type::Date),
	col("l_receiptdate", Type::Date),
	col("l_shipinstruct", Type::Utf8),
	col("l_shipmode", Type::Utf8),
	col("l_comment", Type::Utf8),
];

impl Table {
	pub const ALL: [Table; 8] = [
		Table::Nation,
		Table::Region,
		Table::Part,
		Table::Supplier,
		Table::PartSupp,
		Table::Customer,
		Table::Orders,
		Table::LineItem,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Table::Nation => "nation",
			Table::Region => "region",
			Table::Part => "part",
			Table::Supplier => "supplier",
			Table::PartSupp => "partsupp",
			Table::Customer => "customer",
			Table::Orders => "orders",
			Table::LineItem => "lineitem",
		}
	}

	/// Case-insensitive lookup by table name.
	pub fn from_name(name: &str) -> Result<Table> {
		match Table::ALL.iter().find(|t| t.name().eq_ignore_ascii_case(name)) {
			Some(table) => Ok(*table),
			None => return_error!(TpchError::UnknownTable {
				name: name.to_string()
			}),
		}
	}

	pub fn columns(&self) -> &'static [ColumnDef] {
		match self {
			Table::Nation => &NATION,
			Table::Region => &REGION,
			Table::Part => &PART,
			Table::Supplier => &SUPPLIER,
			Table::PartSupp => &PARTSUPP,
			Table::Customer => &CUSTOMER,
			Table::Orders => &ORDERS,
			Table::LineItem => &LINEITEM,
		}
	}

	/// Ordinal and definition of the column called `name`.
	pub fn column(&self, name: &str) -> Option<(usize, &'static ColumnDef)> {
		self.columns().iter().enumerate().find(|(_, c)| c.name == name)
	}

	pub fn column_ordinal(&self, name: &str) -> Result<usize> {
		match self.column(name) {
			Some((ordinal, _)) => Ok(ordinal),
			None => return_error!(TpchError::UnknownColumn {
				table: self.name().to_string(),
				name: name.to_string()
			}),
		}
	}

	/// Lookup tables have a fixed content independent of the scale factor.
	pub fn is_static(&self) -> bool {
		matches!(self, Table::Nation | Table::Region)
	}

	/// Ordinal of the free-text comment column; always the last one.
	pub fn comment_ordinal(&self) -> usize {
		self.columns().len() - 1
	}
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

pub fn columns_of(table: Table) -> &'static [ColumnDef] {
	table.columns()
}

pub mod nation {
	pub const NATIONKEY: usize = 0;
	pub const NAME: usize = 1;
	pub const REGIONKEY: usize = 2;
	pub const COMMENT: usize = 3;
}

pub mod region {
	pub const REGIONKEY: usize = 0;
	pub const NAME: usize = 1;
	pub const COMMENT: usize = 2;
}

pub mod part {
	pub const PARTKEY: usize = 0;
	pub const NAME: usize = 1;
	pub const MFGR: usize = 2;
	pub const BRAND: usize = 3;
	pub const TYPE: usize = 4;
	pub const SIZE: usize = 5;
	pub const CONTAINER: usize = 6;
	pub const RETAILPRICE: usize = 7;
	pub const COMMENT: usize = 8;
}

pub mod supplier {
	pub const SUPPKEY: usize = 0;
	pub const NAME: usize = 1;
	pub const ADDRESS: usize = 2;
	pub const NATIONKEY: usize = 3;
	pub const PHONE: usize = 4;
	pub const ACCTBAL: usize = 5;
	pub const COMMENT: usize = 6;
}

pub mod partsupp {
	pub const PARTKEY: usize = 0;
	pub const SUPPKEY: usize = 1;
	pub const AVAILQTY: usize = 2;
	pub const SUPPLYCOST: usize = 3;
	pub const COMMENT: usize = 4;
}

pub mod customer {
	pub const CUSTKEY: usize = 0;
	pub const NAME: usize = 1;
	pub const ADDRESS: usize = 2;
	pub const NATIONKEY: usize = 3;
	pub const PHONE: usize = 4;
	pub const ACCTBAL: usize = 5;
	pub const MKTSEGMENT: usize = 6;
	pub const COMMENT: usize = 7;
}

pub mod orders {
	pub const ORDERKEY: usize = 0;
	pub const CUSTKEY: usize = 1;
	pub const ORDERSTATUS: usize = 2;
	pub const TOTALPRICE: usize = 3;
	pub const ORDERDATE: usize = 4;
	pub const ORDERPRIORITY: usize = 5;
	pub const CLERK: usize = 6;
	pub const SHIPPRIORITY: usize = 7;
	pub const COMMENT: usize = 8;
}

pub mod lineitem {
	pub const ORDERKEY: usize = 0;
	pub const PARTKEY: usize = 1;
	pub const SUPPKEY: usize = 2;
	pub const LINENUMBER: usize = 3;
	pub const QUANTITY: usize = 4;
	pub const EXTENDEDPRICE: usize = 5;
	pub const DISCOUNT: usize = 6;
	pub const TAX: usize = 7;
	pub const RETURNFLAG: usize = 8;
	pub const LINESTATUS: usize = 9;
	pub const SHIPDATE: usize = 10;
	pub const COMMITDATE: usize = 11;
	pub const RECEIPTDATE: usize = 12;
	pub const SHIPINSTRUCT: usize = 13;
	pub const SHIPMODE: usize = 14;
	pub const COMMENT: usize = 15;
}
