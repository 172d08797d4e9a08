//! 账户字段校验
//!
//! 规则按固定顺序检查，遇到第一个违规即返回

use std::fmt;

use thiserror::Error;

use super::account::AccountDraft;

/// 被校验的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Document,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Document => "document",
            Field::Phone => "phone",
        }
    }

    fn value_of<'a>(&self, draft: &'a AccountDraft) -> &'a str {
        match self {
            Field::Name => &draft.name,
            Field::Document => &draft.document,
            Field::Phone => &draft.phone,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 长度约束（按字符计数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    AtLeast(usize),
    Exactly(usize),
}

/// 校验规则，顺序即检查顺序
const RULES: [(Field, LengthRule); 3] = [
    (Field::Name, LengthRule::AtLeast(5)),
    (Field::Document, LengthRule::AtLeast(11)),
    (Field::Phone, LengthRule::Exactly(11)),
];

/// 校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("[{0}] must not be blank")]
    Blank(Field),

    #[error("[{field}] must contain at least {min} characters")]
    TooShort { field: Field, min: usize },

    #[error("[{field}] must contain exactly {expected} characters")]
    WrongLength { field: Field, expected: usize },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Blank(field)
            | ValidationError::TooShort { field, .. }
            | ValidationError::WrongLength { field, .. } => *field,
        }
    }
}

/// 校验账户字段
pub fn validate(draft: &AccountDraft) -> Result<(), ValidationError> {
    for (field, rule) in RULES {
        check_field(field, field.value_of(draft), rule)?;
    }
    Ok(())
}

fn check_field(field: Field, value: &str, rule: LengthRule) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Blank(field));
    }

    let len = value.chars().count();
    match rule {
        LengthRule::AtLeast(min) if len < min => Err(ValidationError::TooShort { field, min }),
        LengthRule::Exactly(expected) if len != expected => {
            Err(ValidationError::WrongLength { field, expected })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AccountDraft {
        AccountDraft::new("Anderson", "1234111234121234", "11978651234")
    }

    #[test]
    fn test_valid_draft() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_messages() {
        let cases = [
            (
                AccountDraft { name: String::new(), ..valid() },
                "[name] must not be blank",
            ),
            (
                AccountDraft { name: "test".into(), ..valid() },
                "[name] must contain at least 5 characters",
            ),
            (
                AccountDraft { document: String::new(), ..valid() },
                "[document] must not be blank",
            ),
            (
                AccountDraft { document: "1234567890".into(), ..valid() },
                "[document] must contain at least 11 characters",
            ),
            (
                AccountDraft { phone: String::new(), ..valid() },
                "[phone] must not be blank",
            ),
            (
                AccountDraft { phone: "978651234".into(), ..valid() },
                "[phone] must contain exactly 11 characters",
            ),
            (
                AccountDraft { phone: "119786512345".into(), ..valid() },
                "[phone] must contain exactly 11 characters",
            ),
        ];

        for (draft, expected) in cases {
            let err = validate(&draft).unwrap_err();
            assert_eq!(err.to_string(), expected, "draft: {:?}", draft);
        }
    }

    #[test]
    fn test_first_violation_wins() {
        // 三个字段都非法时只报告 name
        let draft = AccountDraft::new("abc", "", "1");
        assert_eq!(validate(&draft), Err(ValidationError::TooShort { field: Field::Name, min: 5 }));

        // name 合法时报告 document，而不是 phone
        let draft = AccountDraft::new("Anderson", "123", "");
        assert_eq!(validate(&draft).unwrap_err().field(), Field::Document);
    }

    #[test]
    fn test_boundaries() {
        assert!(validate(&AccountDraft { name: "12345".into(), ..valid() }).is_ok());
        assert!(validate(&AccountDraft { document: "12345678901".into(), ..valid() }).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 个字符，10 个字节
        assert!(validate(&AccountDraft { name: "ÁÉÍÓÚ".into(), ..valid() }).is_ok());
        // 4 个字符
        let err = validate(&AccountDraft { name: "João".into(), ..valid() }).unwrap_err();
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn test_whitespace_is_not_blank() {
        assert!(validate(&AccountDraft { name: "     ".into(), ..valid() }).is_ok());
    }
}
