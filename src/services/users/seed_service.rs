use serde_json::{json, Map};
use crate::errors::errors::AppResult;
use crate::repositories::users::Users;

/// 시작 시 등록되는 로컬 계정
#[derive(Debug, Clone, Copy)]
pub struct SeedAccount {
    pub local_id: &'static str,
    pub name: &'static str,
    pub password: &'static str,
    pub age: u32,
}

pub const SEED_ACCOUNTS: [SeedAccount; 2] = [
    SeedAccount {
        local_id: "VntFCHMBWIvLahm",
        name: "barbara.gordon",
        password: "IAmBatgirl",
        age: 37,
    },
    SeedAccount {
        local_id: "GRXgFLzNNfKAM",
        name: "bruce.wayne",
        password: "IAmBatman",
        age: 45,
    },
];

/// 로컬 계정을 등록하고 `password`, `age` 속성을 붙입니다.
///
/// `register`가 멱등이므로 여러 번 호출해도 레코드는 늘어나지 않습니다.
pub fn seed_users(users: &Users) -> AppResult<()> {
    for account in SEED_ACCOUNTS {
        let user = users.register("local", account.local_id, account.name)?;

        let mut attributes = Map::new();
        attributes.insert("password".to_string(), json!(account.password));
        attributes.insert("age".to_string(), json!(account.age));
        users.attach(&user.id, attributes)?;
    }

    log::info!("로컬 계정 {}개 등록 완료", SEED_ACCOUNTS.len());
    Ok(())
}
