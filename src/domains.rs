//! Domain operations.

use reqwest::Method;

use crate::models::{Domain, DomainsList, ResponseStatus};
use crate::{Client, Result};

impl Client {
    /// Fetch all domains belonging to your team.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new("your-api-token")?;
    /// let domains = client.get_domains().await?;
    /// for domain in domains.domains {
    ///     println!("{} (enabled: {})", domain.name, domain.enabled);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_domains(&self) -> Result<DomainsList> {
        self.send_request(Method::GET, "/domains", &[], None::<&()>)
            .await
    }

    /// Fetch a specific domain by id or name.
    pub async fn get_domain(&self, domain_id: &str) -> Result<Domain> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Create a private domain attached to your account.
    ///
    /// The domain name must be unique to the system and your plan must
    /// allow another private domain.
    pub async fn create_domain(&self, name: &str) -> Result<ResponseStatus> {
        self.send_request(Method::POST, &format!("/domains/{name}"), &[], None::<&()>)
            .await
    }

    /// Delete a private domain.
    pub async fn delete_domain(&self, domain_id: &str) -> Result<ResponseStatus> {
        self.send_request(
            Method::DELETE,
            &format!("/domains/{domain_id}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
