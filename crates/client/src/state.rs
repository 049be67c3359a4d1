//! Client-side product list as an explicit state container.
//!
//! State only changes through `reduce`, which is pure: it never performs IO and
//! returns a new state instead of mutating the old one.

use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};
use catalog_products::Product;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub products: Vec<Product>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }
}

/// Server-confirmed changes to apply to the local list.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Replace the whole list (fetch result, or a manual reset).
    Replace(Vec<Product>),
    /// Append a newly created document.
    Created(Product),
    /// Drop every entry with this id.
    Deleted(ProductId),
    /// Swap the entry with this id for the server's post-update document.
    Updated(ProductId, Product),
}

pub fn reduce(state: &CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::Replace(products) => CatalogState { products },
        CatalogAction::Created(product) => {
            let mut products = state.products.clone();
            products.push(product);
            CatalogState { products }
        }
        CatalogAction::Deleted(id) => CatalogState {
            products: state
                .products
                .iter()
                .filter(|p| p.id() != &id)
                .cloned()
                .collect(),
        },
        CatalogAction::Updated(id, updated) => CatalogState {
            products: state
                .products
                .iter()
                .map(|p| if p.id() == &id { updated.clone() } else { p.clone() })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::{NewProduct, ProductPatch};
    use chrono::Utc;

    fn product(name: &str, price: f64) -> Product {
        let draft = NewProduct::new(name, price, format!("http://x/{name}.png"))
            .validate()
            .unwrap();
        Product::from_draft(ProductId::new(), draft, Utc::now())
    }

    #[test]
    fn replace_discards_previous_list() {
        let state = CatalogState::new(vec![product("old", 1.0)]);
        let fresh = vec![product("a", 1.0), product("b", 2.0)];

        let next = reduce(&state, CatalogAction::Replace(fresh.clone()));
        assert_eq!(next.products, fresh);
    }

    #[test]
    fn created_appends_at_the_end() {
        let first = product("a", 1.0);
        let state = CatalogState::new(vec![first.clone()]);
        let second = product("b", 2.0);

        let next = reduce(&state, CatalogAction::Created(second.clone()));
        assert_eq!(next.products, vec![first, second]);
        assert_eq!(state.products.len(), 1, "reduce must not mutate its input");
    }

    #[test]
    fn deleted_removes_only_matching_id() {
        let a = product("a", 1.0);
        let b = product("b", 2.0);
        let state = CatalogState::new(vec![a.clone(), b.clone()]);

        let next = reduce(&state, CatalogAction::Deleted(a.id));
        assert_eq!(next.products, vec![b]);
    }

    #[test]
    fn deleting_unknown_id_is_a_no_op() {
        let state = CatalogState::new(vec![product("a", 1.0)]);
        let next = reduce(&state, CatalogAction::Deleted(ProductId::new()));
        assert_eq!(next, state);
    }

    #[test]
    fn updated_replaces_in_place() {
        let a = product("a", 1.0);
        let b = product("b", 2.0);
        let state = CatalogState::new(vec![a.clone(), b.clone()]);

        let mut changed = a.clone();
        changed.apply_patch(&ProductPatch::default().price(9.0), Utc::now());

        let next = reduce(&state, CatalogAction::Updated(a.id, changed.clone()));
        assert_eq!(next.products, vec![changed, b]);
        assert_eq!(next.get(&a.id).map(|p| p.price), Some(9.0));
    }
}
