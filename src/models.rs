use crate::schema::*;
use bigdecimal::BigDecimal;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Serialize, Deserialize, Debug, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id: i32,
	pub name: String,
	pub username: String,
	pub email: String,
	pub phone_number: Option<String>,
	pub password_hash: String,
	pub face_descriptor: Option<Vec<Option<f32>>>,
	pub balance: Option<BigDecimal>,
}

#[derive(Insertable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
	pub name: &'a str,
	pub username: &'a str,
	pub email: &'a str,
	pub phone_number: Option<&'a str>,
	pub password_hash: &'a str,
	pub face_descriptor: Option<Vec<Option<f32>>>,
}

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(Pg))]
pub struct Transaction {
	pub id: i32,
	pub sender_id: i32,
	pub recipient_account_number: String,
	pub amount: BigDecimal,
	pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = transactions)]
pub struct NewTransaction<'a> {
	pub sender_id: i32,
	pub recipient_account_number: &'a str,
	pub amount: BigDecimal,
}
