//! Company ↔ supplier association.

/// Association between one company and one supplier.
///
/// Carries nothing beyond the pair; existence is all the backend tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub company_id: i64,
    pub supplier_id: i64,
}

impl Link {
    pub fn new(company_id: i64, supplier_id: i64) -> Self {
        Self {
            company_id,
            supplier_id,
        }
    }

    /// Backend path addressing this association.
    pub fn path(&self) -> String {
        format!("empresas/{}/fornecedores/{}", self.company_id, self.supplier_id)
    }
}

/// Link or unlink request as submitted; either side may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkRequest {
    pub company_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

impl LinkRequest {
    /// The complete pair, or `None` when either id is missing.
    pub fn link(&self) -> Option<Link> {
        Some(Link::new(self.company_id?, self.supplier_id?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_path() {
        assert_eq!(Link::new(4, 9).path(), "empresas/4/fornecedores/9");
    }

    #[test]
    fn test_request_requires_both_ids() {
        let partial = LinkRequest {
            company_id: Some(4),
            supplier_id: None,
        };
        assert!(partial.link().is_none());

        let complete = LinkRequest {
            company_id: Some(4),
            supplier_id: Some(9),
        };
        assert_eq!(complete.link(), Some(Link::new(4, 9)));
    }
}
