//! Rule operations.

use reqwest::Method;

use crate::models::{ResponseStatus, Rule, RuleToCreate, Rules};
use crate::{Client, Result};

impl Client {
    /// Create a rule on a private domain.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::{Client, Condition, ConditionData, OperationType, RuleToCreate};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new("your-api-token")?;
    /// let rule = RuleToCreate {
    ///     name: "forward-raul".to_string(),
    ///     enabled: true,
    ///     conditions: vec![Condition {
    ///         operation: OperationType::Prefix,
    ///         condition_data: ConditionData {
    ///             field: "to".to_string(),
    ///             value: "raul".to_string(),
    ///         },
    ///     }],
    ///     ..Default::default()
    /// };
    /// let created = client.create_rule("mydomain.com", &rule).await?;
    /// println!("rule id: {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_rule(&self, domain_id: &str, rule: &RuleToCreate) -> Result<Rule> {
        self.send_request(
            Method::POST,
            &format!("/domains/{domain_id}/rules"),
            &[],
            Some(rule),
        )
        .await
    }

    /// Enable an existing rule.
    pub async fn enable_rule(&self, domain_id: &str, rule_id: &str) -> Result<ResponseStatus> {
        self.send_request(
            Method::PUT,
            &format!("/domains/{domain_id}/rules/{rule_id}/enable"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Disable an existing rule.
    pub async fn disable_rule(&self, domain_id: &str, rule_id: &str) -> Result<ResponseStatus> {
        self.send_request(
            Method::PUT,
            &format!("/domains/{domain_id}/rules/{rule_id}/disable"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch all rules configured on a domain.
    pub async fn get_all_rules(&self, domain_id: &str) -> Result<Rules> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain_id}/rules"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch a specific rule on a domain.
    pub async fn get_rule(&self, domain_id: &str, rule_id: &str) -> Result<Rule> {
        self.send_request(
            Method::GET,
            &format!("/domains/{domain_id}/rules/{rule_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete a specific rule from a domain.
    pub async fn delete_rule(&self, domain_id: &str, rule_id: &str) -> Result<ResponseStatus> {
        self.send_request(
            Method::DELETE,
            &format!("/domains/{domain_id}/rules/{rule_id}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
