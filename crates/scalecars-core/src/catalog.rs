//! # Product Catalog
//!
//! The fixed list of scale models the shop sells.
//!
//! The catalog is built once at startup and never changes afterwards.
//! Ids are generated at construction, so two calls to [`Catalog::seed`]
//! produce catalogs with the same products under different ids.
//!
//! ## Seed Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  30 models, listed in display order                                    │
//! │                                                                         │
//! │  name                      description             price   image_ref  │
//! │  ────────────────────────  ──────────────────────  ──────  ─────────── │
//! │  Porsche 911 GT3 RS        Escala 1:18 - ...       129.99  GTR3RS     │
//! │  Ferrari F40               Escala 1:24 - ...        89.99  FERRARIF40 │
//! │  ...                                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::types::{Product, ProductId};

/// (name, description, price in cents, image token)
const SEED: &[(&str, &str, i64, &str)] = &[
    ("Porsche 911 GT3 RS", "Escala 1:18 - Color blanco", 12999, "GTR3RS"),
    ("Ferrari F40", "Escala 1:24 - Clásico en Rojo Ferrari", 8999, "FERRARIF40"),
    ("McLaren P1", "Escala 1:18 - Acabado en amarillo", 14999, "MCLARENP1"),
    ("Bugatti Chiron", "Escala 1:18 - Edición Sport en Azul Royal", 15999, "BUGATTICHIRON"),
    ("Lamborghini Aventador SVJ", "Escala 1:18 - Naranjo con detalles en fibra de carbono", 13999, "AVENTADORSVJ"),
    ("Aston Martin Valkyrie", "Escala 1:24 - Gris Satinado con acentos rojos", 9999, "ASTONMARTINVALKYRIE"),
    ("Mercedes-AMG GT Black Series", "Escala 1:18 - Gris satinado con detalles en rojo", 13499, "AMGGT"),
    ("BMW M4 GT3", "Escala 1:18 - Decoración Motorsport", 11999, "BMWM4GT3"),
    ("Pagani Huayra R", "Escala 1:18 - Tonos de plata con detalles en amarillo", 16999, "PAGANIHUAYRAR"),
    ("Koenigsegg Jesko", "Escala 1:18 - Blanco Cherry Red", 15999, "KoenigseggJesko"),
    ("Toyota GR Supra", "Escala 1:24 - All black ninja", 7999, "ToyotaGRSupra"),
    ("Nissan GT-R Nismo", "Escala 1:18 - Black and white", 12999, "NissanGT-RNismo"),
    ("Ford GT", "Escala 1:18 - Azul Liquid", 11999, "FordGTHeritage"),
    ("Chevrolet Corvette C8", "Escala 1:24 - All black series", 8499, "ChevroletCorvetteC8"),
    ("Dodge Challenger SRT Demon", "Escala 1:18 - Black Demon", 12499, "DodgeChallengerSRTDemon"),
    ("Audi RS e-tron GT", "Escala 1:18 - Gris Daytona", 13999, "AudiRSe-tronGT"),
    ("Porsche Taycan Turbo S", "Escala 1:24 - Azul Gentian", 8999, "PorscheTaycanTurboS"),
    ("Tesla Model S Plaid", "Escala 1:18 - Snow White", 12999, "TeslaModelSPlaid"),
    ("Rimac Nevera", "Escala 1:18 - Naranjo Satín", 14999, "RimacNevera"),
    ("Alpine A110", "Escala 1:24 - Azul Alpine", 7999, "AlpineA110"),
    ("Lexus LFA", "Escala 1:18 - Silver LFA", 14499, "LexusLFA"),
    ("Honda NSX Type S", "Escala 1:24 - Gris Gotham", 8999, "HondaNSXTypeS"),
    ("Maserati MC20", "Escala 1:18 - Naranjo Perlado", 13499, "MaseratiMC20"),
    ("Lotus Evija", "Escala 1:18 - White and silver Lotus", 14999, "LotusEvija"),
    ("Ferrari SF90 Stradale", "Escala 1:24 - Rojo Corsa Ferrari", 9499, "FerrariSF90Stradale"),
    ("Lamborghini Sián", "Escala 1:18 - Naranjo Perlado", 15999, "LamborghiniSián"),
    ("McLaren Speedtail", "Escala 1:18 - Plata Líquida", 15499, "McLarenSpeedtail"),
    ("Porsche 918 Spyder", "Escala 1:24 - Plata Rhodium", 8999, "Porsche918Spyder"),
    ("Bugatti Bolide", "Escala 1:18 - Negro Carbono/Azul", 16999, "BugattiBolide"),
    ("Koenigsegg Gemera", "Escala 1:18 - Gris Antracita", 15999, "KoenigseggGemera"),
];

/// Ordered, read-only list of products.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds the shop's 30-model catalog.
    pub fn seed() -> Self {
        let products = SEED
            .iter()
            .map(|&(name, description, cents, image_ref)| {
                Product::new(name, description, Money::from_cents(cents), image_ref)
            })
            .collect();

        Catalog { products }
    }

    /// Builds a catalog from arbitrary products (test doubles, demos).
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// All products in display order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_thirty_products() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 30);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_seed_order_and_prices() {
        let catalog = Catalog::seed();
        let products = catalog.products();

        let first = products.first().unwrap();
        assert_eq!(first.name, "Porsche 911 GT3 RS");
        assert_eq!(first.price, Money::from_cents(12999));
        assert_eq!(first.image_ref, "GTR3RS");

        let last = products.last().unwrap();
        assert_eq!(last.name, "Koenigsegg Gemera");
        assert_eq!(last.price.to_string(), "$159.99");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = Catalog::seed();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_prices_are_non_negative() {
        assert!(Catalog::seed()
            .products()
            .iter()
            .all(|p| !p.price.is_negative()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        let ferrari = catalog.products()[1].clone();

        assert_eq!(catalog.get(ferrari.id), Some(&ferrari));
        assert!(catalog.contains(ferrari.id));
        assert!(catalog.get(ProductId::new()).is_none());
    }

    #[test]
    fn test_from_products() {
        let only = Product::new("Test Car", "Escala 1:43", Money::from_cents(100), "TEST");
        let catalog = Catalog::from_products(vec![only.clone()]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(only.id), Some(&only));
    }
}
