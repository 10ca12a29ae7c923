//! # Entities
//!
//! 고유 식별자로 구분되는 도메인 객체의 공통 인터페이스입니다.
//! 아직 저장되지 않은 엔티티는 식별자가 없으며(`None`), 이를 "transient" 상태라고 부릅니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub name: RequiredText,
//! }
//!
//! impl Entity for User {
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//! ```

/// 엔티티 공통 인터페이스
pub trait Entity {
    fn id(&self) -> Option<&str>;

    /// 아직 식별자가 부여되지 않은 엔티티인지 확인합니다.
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }

    /// 두 엔티티가 같은 식별자를 가지는지 확인합니다. transient 엔티티는 어떤 엔티티와도 같지 않습니다.
    fn same_identity_as(&self, other: &impl Entity) -> bool
    where
        Self: Sized,
    {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account {
        id: Option<String>,
    }

    impl Entity for Account {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    #[test]
    fn test_transient_entity() {
        let account = Account { id: None };

        assert!(account.is_transient());
        assert!(!account.same_identity_as(&Account { id: None }));
    }

    #[test]
    fn test_same_identity() {
        let a = Account { id: Some("42".to_string()) };
        let b = Account { id: Some("42".to_string()) };
        let c = Account { id: Some("7".to_string()) };

        assert!(!a.is_transient());
        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&c));
    }
}
