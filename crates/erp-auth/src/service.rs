use super::*;
use erp_core::ID;
use erp_core::Unique;
use std::sync::Arc;
use tokio::sync::OnceCell;
use validator::Validate;
use validator::ValidationErrors;

/// Validated fields in the order failures are reported.
const FIELDS: [&str; 3] = ["email", "name", "password"];

/// Plaintext behind the hash verified against when the email is unknown,
/// so a miss costs the same hashing work as a wrong password.
const DECOY: &str = "decoy-password";

/// Registration and login on top of a credential store and token issuer.
pub struct Accounts {
    users: Arc<dyn Users>,
    issuer: Arc<Issuer>,
    hasher: Hasher,
    decoy: OnceCell<String>,
}

impl Accounts {
    pub fn new(users: Arc<dyn Users>, issuer: Arc<Issuer>) -> Self {
        Self {
            users,
            issuer,
            hasher: Hasher::default(),
            decoy: OnceCell::new(),
        }
    }

    /// Validates, hashes, and persists a new account with the default role.
    /// Duplicate emails are detected by the store, not pre-checked here.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<Registered, AuthError> {
        let request = RegisterRequest {
            email: normalize(email),
            name: name.trim().to_string(),
            password: password.to_string(),
        };
        request.validate().map_err(rejection)?;
        let hashword = blocking({
            let hasher = self.hasher.clone();
            let plain = request.password;
            move || hasher.hash(&plain).map_err(AuthError::internal)
        })
        .await?;
        let user = User::new(
            ID::default(),
            request.email,
            request.name,
            DEFAULT_ROLE.to_string(),
        );
        self.users.create(&user, &hashword).await?;
        log::info!("registered user {}", user.id());
        Ok(Registered {
            id: user.id().to_string(),
            email: user.email().to_string(),
        })
    }

    /// Exchanges credentials for a signed session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let found = self.users.lookup(&normalize(email)).await?;
        let hashword = match found {
            Some((_, ref hashword)) => hashword.clone(),
            None => self.decoy().await?.clone(),
        };
        let matches = blocking({
            let hasher = self.hasher.clone();
            let plain = password.to_string();
            move || Ok(hasher.verify(&plain, &hashword))
        })
        .await?;
        let user = match found {
            Some((user, _)) if matches => user,
            _ => return Err(AuthError::Unauthenticated),
        };
        let token = self
            .issuer
            .issue(user.id(), user.email(), user.role())
            .map_err(AuthError::internal)?;
        log::info!("user {} logged in", user.id());
        Ok(TokenResponse { token })
    }

    /// Hash of [`DECOY`], computed once with the same hasher as real
    /// accounts. A failure is an internal error, never an empty hash.
    async fn decoy(&self) -> Result<&String, AuthError> {
        self.decoy
            .get_or_try_init(|| {
                blocking({
                    let hasher = self.hasher.clone();
                    move || hasher.hash(DECOY).map_err(AuthError::internal)
                })
            })
            .await
    }
}

/// Runs CPU-bound hashing off the async workers.
async fn blocking<T, F>(f: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(AuthError::internal)?
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// First failing field, in [`FIELDS`] order, as an invalid-input error.
fn rejection(errors: ValidationErrors) -> AuthError {
    let fields = errors.field_errors();
    FIELDS
        .into_iter()
        .find_map(|field| {
            fields
                .get(field)
                .and_then(|errs| errs.first())
                .map(|e| AuthError::invalid(field, e.message.as_deref().unwrap_or("is invalid")))
        })
        .unwrap_or_else(|| AuthError::invalid("body", errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    fn accounts() -> Accounts {
        Accounts::new(
            Arc::new(MemoryUsers::default()),
            Arc::new(Issuer::new(&Secret::new("test-secret"))),
        )
    }
    async fn rejected_field(accounts: &Accounts, email: &str, name: &str, password: &str) -> &'static str {
        match accounts.register(email, name, password).await {
            Err(AuthError::InvalidInput { field, .. }) => field,
            other => panic!("expected invalid input for {:?}, got {:?}", email, other),
        }
    }
    #[tokio::test]
    async fn register_rejects_malformed_emails() {
        let accounts = accounts();
        let malformed = [
            "",
            "ax.com",
            "@x.com",
            "a@x..com",
            "a@.com",
            "a@@x.com",
            "a b@x.com",
            "<script>@x.com",
            "a,b@x.com",
            "a@-x-.com",
            "a@x_y.com",
            "\"@x.com",
        ];
        for email in malformed {
            assert_eq!(rejected_field(&accounts, email, "A", "password123").await, "email");
        }
        assert!(accounts.users.list().await.unwrap().is_empty());
    }
    #[tokio::test]
    async fn register_accepts_plus_and_subdomains() {
        let accounts = accounts();
        let registered = accounts
            .register("First.Last+tag@mail.example.org", "A", "password123")
            .await
            .unwrap();
        assert_eq!(registered.email, "first.last+tag@mail.example.org");
    }
    #[tokio::test]
    async fn register_returns_id_and_email() {
        let registered = accounts()
            .register("a@x.com", "A", "password123")
            .await
            .unwrap();
        assert!(!registered.id.is_empty());
        assert_eq!(registered.email, "a@x.com");
    }
    #[tokio::test]
    async fn register_names_the_bad_field() {
        let accounts = accounts();
        let long = "n".repeat(256);
        let cases = [
            ("not-an-email", "A", "password123", "email"),
            ("a@x.com", "   ", "password123", "name"),
            ("a@x.com", long.as_str(), "password123", "name"),
            ("a@x.com", "A", "short", "password"),
            ("not-an-email", "", "short", "email"),
        ];
        for (email, name, password, expected) in cases {
            assert_eq!(rejected_field(&accounts, email, name, password).await, expected);
        }
    }
    #[tokio::test]
    async fn register_twice_conflicts() {
        let accounts = accounts();
        accounts.register("a@x.com", "A", "password123").await.unwrap();
        let again = accounts.register("A@X.com ", "B", "password456").await;
        assert_eq!(again.unwrap_err(), AuthError::Conflict);
    }
    #[tokio::test]
    async fn login_issues_token_with_identity() {
        let accounts = accounts();
        let registered = accounts.register("a@x.com", "A", "password123").await.unwrap();
        let token = accounts.login("a@x.com", "password123").await.unwrap().token;
        let claims = accounts.issuer.verify(&token).unwrap();
        assert_eq!(claims.user().to_string(), registered.id);
        assert_eq!(claims.email(), "a@x.com");
        assert_eq!(claims.role(), DEFAULT_ROLE);
    }
    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let accounts = accounts();
        accounts.register("a@x.com", "A", "password123").await.unwrap();
        let wrong = accounts.login("a@x.com", "password124").await.unwrap_err();
        let unknown = accounts.login("b@x.com", "password123").await.unwrap_err();
        assert_eq!(wrong, AuthError::Unauthenticated);
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.to_string(), unknown.to_string());
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_admit_exactly_one() {
        let accounts = Arc::new(accounts());
        let racers = (0..8)
            .map(|i| {
                let accounts = accounts.clone();
                tokio::spawn(async move {
                    accounts
                        .register("a@x.com", "A", &format!("password{}", i))
                        .await
                })
            })
            .collect::<Vec<_>>();
        let mut outcomes = Vec::new();
        for racer in racers {
            outcomes.push(racer.await.unwrap());
        }
        let admitted = outcomes.iter().filter(|r| r.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|r| matches!(r, Err(AuthError::Conflict)))
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(conflicts, 7);
    }
    #[tokio::test]
    async fn unknown_email_is_checked_against_a_real_hash() {
        let accounts = accounts();
        let failed = accounts.login("nobody@x.com", "password123").await;
        assert_eq!(failed.unwrap_err(), AuthError::Unauthenticated);
        let decoy = accounts.decoy().await.unwrap();
        assert!(decoy.starts_with("$argon2id$"));
        assert!(accounts.hasher.verify(DECOY, decoy));
    }
}
