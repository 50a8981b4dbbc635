mod schema_tests;

use crate::core::services::UserService;
use crate::infrastructure::repository::in_memory::InMemoryUserRepository;

pub fn create_test_service() -> UserService<InMemoryUserRepository> {
    UserService::new(InMemoryUserRepository::new())
}
