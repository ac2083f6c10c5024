//! # Domain Entities
//!
//! 프로세스 메모리에만 존재하는 도메인 엔티티들입니다.
//! 영속 저장소는 없으며, 엔티티의 생명주기는 프로세스와 같습니다.

pub mod users;
