// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use std::fmt;

/// Order lifecycle status. The wire representation stays a lowercase string,
/// but the set is closed: anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Completed,
  Cancelled,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Completed => "completed",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  /// Strict parse of the wire form; `None` for anything outside the set.
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "pending" => Some(OrderStatus::Pending),
      "completed" => Some(OrderStatus::Completed),
      "cancelled" => Some(OrderStatus::Cancelled),
      _ => None,
    }
  }

  /// Transition table applied when `ORDER_STATUS_ENFORCE_TRANSITIONS` is on.
  /// Completed and cancelled orders are terminal; same-status writes pass.
  pub fn can_transition_to(&self, next: OrderStatus) -> bool {
    match (self, next) {
      (current, next) if *current == next => true,
      (OrderStatus::Pending, _) => true,
      _ => false,
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub user_id: i64,
  pub product_id: i64,
  pub quantity: i32,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_round_trips_through_its_wire_form() {
    for status in [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled] {
      assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
    }
  }

  #[test]
  fn unknown_statuses_do_not_parse() {
    assert_eq!(OrderStatus::parse("shipped"), None);
    assert_eq!(OrderStatus::parse("PENDING"), None);
    assert_eq!(OrderStatus::parse(""), None);
  }

  #[test]
  fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "\"pending\"");
    let parsed: OrderStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, OrderStatus::Completed);
  }

  #[test]
  fn pending_is_the_only_open_state() {
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
    assert!(OrderStatus::Completed.can_transition_to(OrderStatus::Completed));
    assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
    assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Completed));
  }
}
