//! Compiled-in calculator catalog.
//!
//! These tables are the only source of prices for the calculator. They live
//! for the whole process and are never written to, so lookups need no
//! locking.

use crate::pricing::models::{
    BrandingOption, CalculatorOptions, CategoryOption, FabricOption, Multiplier, QuantityOption,
};

pub static CATEGORIES: &[CategoryOption] = &[
    CategoryOption {
        id: "shirts",
        name: "Shirts",
        base_price: 1200,
    },
    CategoryOption {
        id: "suits",
        name: "Suits",
        base_price: 3500,
    },
    CategoryOption {
        id: "dresses",
        name: "Dresses",
        base_price: 2100,
    },
    CategoryOption {
        id: "aprons",
        name: "Aprons",
        base_price: 800,
    },
    CategoryOption {
        id: "jackets",
        name: "Jackets",
        base_price: 2800,
    },
    CategoryOption {
        id: "workwear",
        name: "Workwear",
        base_price: 1800,
    },
];

pub static QUANTITIES: &[QuantityOption] = &[
    QuantityOption {
        range: "1-10",
        multiplier: Multiplier::from_hundredths(150),
    },
    QuantityOption {
        range: "11-50",
        multiplier: Multiplier::from_hundredths(120),
    },
    QuantityOption {
        range: "51-100",
        multiplier: Multiplier::from_hundredths(110),
    },
    QuantityOption {
        range: "101-500",
        multiplier: Multiplier::ONE,
    },
    QuantityOption {
        range: "501+",
        multiplier: Multiplier::from_hundredths(90),
    },
];

pub static FABRICS: &[FabricOption] = &[
    FabricOption {
        id: "cotton",
        name: "Cotton",
        multiplier: Multiplier::ONE,
    },
    FabricOption {
        id: "polyester",
        name: "Polyester",
        multiplier: Multiplier::from_hundredths(80),
    },
    FabricOption {
        id: "wool",
        name: "Wool",
        multiplier: Multiplier::from_hundredths(140),
    },
    FabricOption {
        id: "premium",
        name: "Premium",
        multiplier: Multiplier::from_hundredths(180),
    },
];

pub static BRANDING: &[BrandingOption] = &[
    BrandingOption {
        id: "none",
        name: "No branding",
        price: 0,
    },
    BrandingOption {
        id: "embroidery",
        name: "Embroidery",
        price: 150,
    },
    BrandingOption {
        id: "print",
        name: "Print",
        price: 80,
    },
    BrandingOption {
        id: "both",
        name: "Embroidery + print",
        price: 200,
    },
];

pub static CATALOG: CalculatorOptions = CalculatorOptions {
    categories: CATEGORIES,
    quantities: QUANTITIES,
    fabrics: FABRICS,
    branding: BRANDING,
};

pub fn find_category(id: &str) -> Option<&'static CategoryOption> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn find_quantity(range: &str) -> Option<&'static QuantityOption> {
    QUANTITIES.iter().find(|q| q.range == range)
}

pub fn find_fabric(id: &str) -> Option<&'static FabricOption> {
    FABRICS.iter().find(|f| f.id == id)
}

pub fn find_branding(id: &str) -> Option<&'static BrandingOption> {
    BRANDING.iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_option_keys_are_unique() {
        let categories: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
        let quantities: HashSet<_> = QUANTITIES.iter().map(|q| q.range).collect();
        let fabrics: HashSet<_> = FABRICS.iter().map(|f| f.id).collect();
        let branding: HashSet<_> = BRANDING.iter().map(|b| b.id).collect();

        assert_eq!(categories.len(), CATEGORIES.len());
        assert_eq!(quantities.len(), QUANTITIES.len());
        assert_eq!(fabrics.len(), FABRICS.len());
        assert_eq!(branding.len(), BRANDING.len());
    }

    #[test]
    fn test_lookups_are_exact() {
        assert_eq!(find_category("suits").map(|c| c.base_price), Some(3500));
        assert!(find_category("Suits").is_none());
        assert!(find_category(" suits").is_none());

        assert_eq!(
            find_quantity("501+").map(|q| q.multiplier),
            Some(Multiplier::from_hundredths(90))
        );
        assert!(find_quantity("501").is_none());
        assert!(find_quantity("").is_none());

        assert!(find_fabric("wool").is_some());
        assert!(find_fabric("shirts").is_none());

        assert_eq!(find_branding("print").map(|b| b.price), Some(80));
        assert!(find_branding("cotton").is_none());
    }
}
