use snapmenu::{MenuCategory, MenuDocument, MenuItem};
use snapmenu_sharelink::{build, decode, encode, extract, QR_ADVISORY_LIMIT};

fn item(name: &str, description: &str, price: &str, tags: Option<&[&str]>) -> MenuItem {
    MenuItem {
        name: name.to_owned(),
        description: description.to_owned(),
        price: price.to_owned(),
        tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
    }
}

fn category(name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        name: name.to_owned(),
        items,
    }
}

fn full_document() -> MenuDocument {
    MenuDocument {
        restaurant_name: "Cafe Sol".to_owned(),
        description: Some("Breakfast and lunch, since 1987".to_owned()),
        categories: vec![
            category(
                "Drinks",
                vec![
                    item("Latte", "Double shot, oat milk on request", "$4.00", Some(&["Hot"])),
                    item("Iced Tea", "", "$3.50", None),
                ],
            ),
            category(
                "Mains",
                vec![item(
                    "Huevos Rancheros",
                    "Two eggs, salsa roja, tortillas",
                    "$11.00",
                    Some(&["Spicy", "GF"]),
                )],
            ),
        ],
    }
}

#[test]
fn test_roundtrip_minimal_document() {
    let original = MenuDocument::new("Cafe Sol");

    let token = encode(&original).unwrap();
    let decoded = decode(&token).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_full_document() {
    let original = full_document();

    let token = encode(&original).unwrap();
    let decoded = decode(&token).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_sparse_shapes() {
    // Zero categories, a category with zero items, an item with empty
    // description and absent tags, and an item with an explicitly empty
    // tag list all survive unchanged.
    let original = MenuDocument {
        restaurant_name: "Bare".to_owned(),
        description: None,
        categories: vec![
            category("Empty", Vec::new()),
            category(
                "Drinks",
                vec![
                    item("Water", "", "0", None),
                    item("Soda", "", "1", Some(&[])),
                ],
            ),
        ],
    };

    let decoded = decode(&encode(&original).unwrap()).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.categories[1].items[0].tags, None);
    assert_eq!(decoded.categories[1].items[1].tags, Some(Vec::new()));
}

#[test]
fn test_roundtrip_unicode_text() {
    let original = MenuDocument {
        restaurant_name: "Café Müller 食堂".to_owned(),
        description: Some("Handwritten – OCR’d".to_owned()),
        categories: vec![category(
            "Entrées",
            vec![
                item("Smørrebrød", "rugbrød, røget laks", "45 kr", Some(&["🌶️", "GF"])),
                item("辛いラーメン", "豚骨スープ", "¥950", None),
                item("Crème brûlée", "", "€6,50", None),
            ],
        )],
    };

    let decoded = decode(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_url_hostile_text() {
    // Document text never has to be URL-safe; only the token does.
    let original = MenuDocument {
        restaurant_name: "R&B ?Grill# 100%".to_owned(),
        description: Some("a=b&c=d?e#f".to_owned()),
        categories: vec![category(
            "Specials",
            vec![item("Fish & Chips", "with salt + vinegar", "£7/£9", None)],
        )],
    };

    let token = encode(&original).unwrap();
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    assert_eq!(decode(&token).unwrap(), original);
}

#[test]
fn test_order_preserved_exactly() {
    let original = MenuDocument {
        restaurant_name: "Ordered".to_owned(),
        description: None,
        categories: vec![
            category("A", vec![item("x", "", "1", None), item("y", "", "2", None)]),
            category("B", vec![item("x", "", "1", None), item("y", "", "2", None)]),
        ],
    };

    let decoded = decode(&encode(&original).unwrap()).unwrap();

    let names: Vec<&str> = decoded.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    for cat in &decoded.categories {
        let items: Vec<&str> = cat.items.iter().map(|i| i.name.as_str()).collect();
        // Not reordered, not deduplicated
        assert_eq!(items, ["x", "y"]);
    }
}

#[test]
fn test_encode_is_deterministic() {
    let document = full_document();
    assert_eq!(encode(&document).unwrap(), encode(&document).unwrap());
}

#[test]
fn test_decode_failures_are_values() {
    assert!(decode("").is_err());
    assert!(decode("not-a-valid-token").is_err());

    let token = encode(&full_document()).unwrap();
    assert!(decode(&format!("{}AAAA", token)).is_err());
    assert!(decode(&token[..token.len() / 2]).is_err());
}

#[test]
fn test_share_address_roundtrip() {
    let document = full_document();
    let address = build(&document, "https://menu.example/").unwrap();

    let token = extract(address.as_str()).unwrap();
    assert_eq!(token, encode(&document).unwrap());
    assert_eq!(decode(&token).unwrap(), document);
}

#[test]
fn test_oversized_menu_still_builds_with_advisory() {
    // Hashed hex names defeat compression enough to push the address past
    // the QR advisory threshold.
    let mut document = MenuDocument::new("Encyclopedic Diner");
    let mut big = MenuCategory::new("Everything");
    for i in 0u64..1500 {
        let name = format!("{:016x}", i.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        big.items.push(MenuItem::new(name, format!("${}.00", i)));
    }
    document.categories.push(big);

    let address = build(&document, "https://menu.example/").unwrap();

    assert!(address.as_str().len() > QR_ADVISORY_LIMIT);
    assert!(address.exceeds_qr_capacity());

    // Not truncated: the full document still comes back out.
    let token = extract(address.as_str()).unwrap();
    assert_eq!(decode(&token).unwrap(), document);
}

#[test]
fn test_cafe_sol_end_to_end() {
    let original = MenuDocument {
        restaurant_name: "Cafe Sol".to_owned(),
        description: None,
        categories: vec![category(
            "Drinks",
            vec![item("Latte", "", "$4.00", Some(&["Hot"]))],
        )],
    };

    let token = encode(&original).unwrap();
    assert_eq!(decode(&token).unwrap(), original);

    let address = build(&original, "https://menu.example/").unwrap();
    assert_eq!(extract(address.as_str()).unwrap(), token);
    assert_eq!(decode(&token).unwrap(), original);
}
