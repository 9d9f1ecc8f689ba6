//! 个人资料页的字段列表
//!
//! 邮箱总是显示；电话、年龄、性别只有在有值时才显示。

use gamepass_shared::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Email,
    Phone,
    Age,
    Gender,
}

impl DetailKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetailKind::Email => "Email",
            DetailKind::Phone => "Phone",
            DetailKind::Age => "Age",
            DetailKind::Gender => "Gender",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetail {
    pub kind: DetailKind,
    pub value: String,
}

pub fn profile_details(session: &Session) -> Vec<ProfileDetail> {
    let present = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

    let mut details = vec![ProfileDetail {
        kind: DetailKind::Email,
        value: session.email.clone(),
    }];
    if let Some(phone) = present(&session.phone) {
        details.push(ProfileDetail {
            kind: DetailKind::Phone,
            value: phone,
        });
    }
    if let Some(age) = session.age.filter(|a| *a != 0) {
        details.push(ProfileDetail {
            kind: DetailKind::Age,
            value: format!("{} years", age),
        });
    }
    if let Some(gender) = present(&session.gender) {
        details.push(ProfileDetail {
            kind: DetailKind::Gender,
            value: gender,
        });
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            id: "u1".into(),
            name: "Ada".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            token: "tok".into(),
            age: None,
            gender: None,
            phone: None,
            photo_url: None,
        }
    }

    #[test]
    fn test_only_email_when_optionals_absent() {
        let details = profile_details(&session());
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].kind, DetailKind::Email);
    }

    #[test]
    fn test_present_fields_in_display_order() {
        let mut s = session();
        s.phone = Some("555-0100".into());
        s.age = Some(36);
        s.gender = Some("female".into());

        let kinds: Vec<_> = profile_details(&s).iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DetailKind::Email, DetailKind::Phone, DetailKind::Age, DetailKind::Gender]
        );
        assert_eq!(profile_details(&s)[2].value, "36 years");
    }

    #[test]
    fn test_empty_and_zero_values_are_hidden() {
        let mut s = session();
        s.phone = Some(String::new());
        s.age = Some(0);
        assert_eq!(profile_details(&s).len(), 1);
    }
}
