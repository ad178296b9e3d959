//! Behaviour tests for the users and people services over in-memory storage.

use std::cell::RefCell;
use std::sync::Arc;

use backend::domain::ports::{PeopleCommand, PeopleQuery, UsersCommand, UsersQuery};
use backend::domain::{
    Error, ErrorCode, PeopleService, Person, PersonDraft, PersonId, PersonValidationError, User,
    UserId, UserRegistration, UsersService,
};
use backend::outbound::memory::{InMemoryPersonRepository, InMemoryUserRepository};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

type Users = UsersService<InMemoryUserRepository>;
type People = PeopleService<InMemoryPersonRepository>;

struct LifecycleWorld {
    runtime: Runtime,
    users: RefCell<Arc<Users>>,
    people: RefCell<Arc<People>>,
    last_user: RefCell<Option<User>>,
    last_person: RefCell<Option<Person>>,
    last_error: RefCell<Option<Error>>,
    draft_error: RefCell<Option<PersonValidationError>>,
}

impl LifecycleWorld {
    fn new() -> Self {
        Self {
            runtime: Runtime::new().expect("tokio runtime should initialize"),
            users: RefCell::new(fresh_users()),
            people: RefCell::new(fresh_people()),
            last_user: RefCell::new(None),
            last_person: RefCell::new(None),
            last_error: RefCell::new(None),
            draft_error: RefCell::new(None),
        }
    }

    fn users(&self) -> Arc<Users> {
        self.users.borrow().clone()
    }

    fn people(&self) -> Arc<People> {
        self.people.borrow().clone()
    }

    fn record<T>(&self, outcome: Result<T, Error>, slot: &RefCell<Option<T>>) {
        match outcome {
            Ok(value) => {
                *slot.borrow_mut() = Some(value);
                *self.last_error.borrow_mut() = None;
            }
            Err(error) => *self.last_error.borrow_mut() = Some(error),
        }
    }
}

fn fresh_users() -> Arc<Users> {
    Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new())))
}

fn fresh_people() -> Arc<People> {
    Arc::new(PeopleService::new(Arc::new(InMemoryPersonRepository::new())))
}

fn parse_code(code: &str) -> ErrorCode {
    serde_json::from_value(serde_json::Value::String(code.to_owned()))
        .expect("known error code")
}

#[fixture]
fn world() -> LifecycleWorld {
    LifecycleWorld::new()
}

#[given("an empty in-memory store")]
fn an_empty_in_memory_store(world: &LifecycleWorld) {
    *world.users.borrow_mut() = fresh_users();
    *world.people.borrow_mut() = fresh_people();
}

#[when("a user registers with email \"{email}\" and password \"{password}\"")]
fn a_user_registers(world: &LifecycleWorld, email: String, password: String) {
    let registration = UserRegistration::try_new(email, password).expect("valid registration");
    let users = world.users();
    let outcome = world
        .runtime
        .block_on(async { users.create_user(registration).await });
    world.record(outcome, &world.last_user);
}

#[when("user {id} is deleted")]
fn user_is_deleted(world: &LifecycleWorld, id: i32) {
    let users = world.users();
    let outcome = world
        .runtime
        .block_on(async { users.delete_user(UserId::new(id)).await });
    world.record(outcome, &world.last_user);
}

#[when("a person named \"{name}\" described as \"{description}\" is created")]
fn a_person_is_created(world: &LifecycleWorld, name: String, description: String) {
    let draft = PersonDraft::try_new(name, description).expect("valid draft");
    let people = world.people();
    let outcome = world
        .runtime
        .block_on(async { people.create_person(draft).await });
    world.record(outcome, &world.last_person);
}

#[when("person {id} is deleted")]
fn person_is_deleted(world: &LifecycleWorld, id: i32) {
    let people = world.people();
    let outcome = world
        .runtime
        .block_on(async { people.delete_person(PersonId::new(id)).await });
    world.record(outcome, &world.last_person);
}

#[when("a person is drafted without a name")]
fn a_person_is_drafted_without_a_name(world: &LifecycleWorld) {
    *world.draft_error.borrow_mut() = PersonDraft::try_new("   ", "nobody").err();
}

#[then("the user list contains {count} record")]
fn the_user_list_contains(world: &LifecycleWorld, count: usize) {
    let users = world.users();
    let listed = world
        .runtime
        .block_on(async { users.list_users().await })
        .expect("listing succeeds");
    assert_eq!(listed.len(), count);
}

#[then("the stored password hash does not contain \"{plaintext}\"")]
fn the_stored_hash_hides_the_plaintext(world: &LifecycleWorld, plaintext: String) {
    let last_user = world.last_user.borrow();
    let user = last_user.as_ref().expect("a registered user");
    let stored: &str = user.password_hash().as_ref();
    assert!(stored.starts_with("$argon2id$"));
    assert!(!stored.contains(&plaintext));
}

#[then("fetching user {id} fails with \"{code}\"")]
fn fetching_user_fails(world: &LifecycleWorld, id: i32, code: String) {
    let users = world.users();
    let error = world
        .runtime
        .block_on(async { users.get_user(UserId::new(id)).await })
        .expect_err("lookup should fail");
    assert_eq!(error.code(), parse_code(&code));
}

#[then("fetching person {id} fails with \"{code}\"")]
fn fetching_person_fails(world: &LifecycleWorld, id: i32, code: String) {
    let people = world.people();
    let error = world
        .runtime
        .block_on(async { people.get_person(PersonId::new(id)).await })
        .expect_err("lookup should fail");
    assert_eq!(error.code(), parse_code(&code));
}

#[then("the last operation fails with \"{code}\"")]
fn the_last_operation_fails(world: &LifecycleWorld, code: String) {
    let last_error = world.last_error.borrow();
    let error = last_error.as_ref().expect("an error was recorded");
    assert_eq!(error.code(), parse_code(&code));
}

#[then("the last created person has id {id}")]
fn the_last_created_person_has_id(world: &LifecycleWorld, id: i32) {
    let last_person = world.last_person.borrow();
    let person = last_person.as_ref().expect("a created person");
    assert_eq!(person.id(), PersonId::new(id));
}

#[then("the draft is rejected for field \"{field}\"")]
fn the_draft_is_rejected(world: &LifecycleWorld, field: String) {
    let draft_error = world.draft_error.borrow();
    let error = draft_error.as_ref().expect("draft should be rejected");
    assert_eq!(error.field(), field);
}

#[scenario(
    path = "tests/features/resource_lifecycle.feature",
    name = "A registered user can be fetched and removed"
)]
fn a_registered_user_can_be_fetched_and_removed(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/resource_lifecycle.feature",
    name = "Registering the same email twice conflicts"
)]
fn registering_the_same_email_twice_conflicts(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/resource_lifecycle.feature",
    name = "Deleted person identifiers are not reused"
)]
fn deleted_person_identifiers_are_not_reused(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/resource_lifecycle.feature",
    name = "People require a name"
)]
fn people_require_a_name(world: LifecycleWorld) {
    drop(world);
}
