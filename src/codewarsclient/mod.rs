pub use types::{CodewarsUser, RankScore, UserRanks};

mod types;

const DEFAULT_USER_URL: &str = "https://www.codewars.com/api/v1/users/{username}";

pub trait CodewarsClient {
    fn get_user(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<CodewarsUser, anyhow::Error>> + Send;
}

pub struct CodewarsEndpoints {
    user: String,
}

pub struct CodewarsReqwestClient {
    endpoints: CodewarsEndpoints,
}

impl Default for CodewarsEndpoints {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER_URL.to_string(),
        }
    }
}

impl CodewarsReqwestClient {
    pub fn new() -> Self {
        CodewarsReqwestClient::new_with_endpoints(CodewarsEndpoints::default())
    }

    pub fn new_with_endpoints(endpoints: CodewarsEndpoints) -> Self {
        Self { endpoints }
    }

    async fn perform_request(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::new().get(url).send().await
    }
}

impl Default for CodewarsReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CodewarsClient for CodewarsReqwestClient {
    async fn get_user(&self, username: &str) -> Result<CodewarsUser, anyhow::Error> {
        let response = self
            .perform_request(&self.endpoints.user.replace("{username}", username))
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "lookup for {} returned status {}",
                username,
                response.status()
            ));
        }

        Ok(response.json::<CodewarsUser>().await?)
    }
}

#[cfg(test)]
pub struct MockCodewarsClient {
    pub users: std::collections::HashMap<String, CodewarsUser>,
    pub requested: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Default for MockCodewarsClient {
    fn default() -> Self {
        Self {
            users: std::collections::HashMap::new(),
            requested: std::sync::Mutex::new(vec![]),
        }
    }
}

#[cfg(test)]
impl MockCodewarsClient {
    /// Serves the given records keyed by username; any other lookup fails
    /// the way a 404 from the real service would.
    pub fn with_users(users: Vec<CodewarsUser>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
            requested: std::sync::Mutex::new(vec![]),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().expect("requested lock poisoned").len()
    }
}

#[cfg(test)]
impl CodewarsClient for MockCodewarsClient {
    async fn get_user(&self, username: &str) -> Result<CodewarsUser, anyhow::Error> {
        self.requested
            .lock()
            .expect("requested lock poisoned")
            .push(username.to_string());
        self.users
            .get(username)
            .cloned()
            .ok_or(anyhow::anyhow!("user not found: {}", username))
    }
}
