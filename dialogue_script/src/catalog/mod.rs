//! Built-in scenarios.
//!
//! Scenarios can also be loaded from TOML files; the catalog carries the
//! ones shipped with the engine as static in-memory data.

use crate::scenario::Scenario;
use crate::script::{Choice, Node, TriText};
use crate::slots::SlotValue;

fn t(native: &str, translation: &str, transliteration: &str) -> TriText {
    TriText::new(native, translation, transliteration)
}

/// The izakaya ordering scenario: party size, first drink, calling the
/// staff, ordering food, extra rounds, and paying the bill.
pub fn izakaya() -> Scenario {
    Scenario::new("izakaya", "start")
        .with_title("いざかや / Izakaya")
        .with_blurb("にんずう→のみもの→すみません→たべもの→ついか→おかいけい")
        .with_emoji("🍶")
        .with_avatar("images/npc_staff.png")
        .with_default_slot("food", SlotValue::List(Vec::new()))
        .with_node(
            "start",
            Node::new(t(
                "いらっしゃいませ。なんめいさまですか？",
                "Welcome. How many people?",
                "irasshaimase. nan-mei sama desu ka?",
            ))
            .with_background("images/izakaya1.jpg")
            .with_choices([
                Choice::goto(t("ひとりです", "One person", "hitori desu"), "drink")
                    .with_assign("n", 1)
                    .with_overlay("images/finger_1.png"),
                Choice::goto(t("ふたりです", "Two people", "futari desu"), "drink")
                    .with_assign("n", 2)
                    .with_overlay("images/finger_2.png"),
                Choice::goto(t("さんにんです", "Three people", "sannin desu"), "drink")
                    .with_assign("n", 3)
                    .with_overlay("images/finger_3.png"),
            ]),
        )
        .with_node(
            "drink",
            Node::new(t(
                "さいしょの おのみものは？",
                "What would you like to drink first?",
                "saisho no onomimono wa?",
            ))
            .with_choices([
                Choice::goto(t("れもんさわー", "Lemon sour", "remon sawaa"), "call_staff")
                    .with_assign("drink", "lemon")
                    .with_background("images/drink_lemon_sour.jpg"),
                Choice::goto(t("おとこうめさわー", "Otoko-ume sour", "otoko-ume sawaa"), "call_staff")
                    .with_assign("drink", "ume")
                    .with_background("images/drink_otoko_ume.jpg"),
                Choice::goto(t("にほんしゅ", "Sake", "nihonshu"), "call_staff")
                    .with_assign("drink", "sake")
                    .with_background("images/drink_sake.jpg"),
            ]),
        )
        .with_node(
            "call_staff",
            Node::new(t(
                "決まったら呼んでくださいね",
                "Call me when you're ready",
                "kimattara yonnde kudasaine-",
            ))
            .with_choice(
                Choice::goto(t("すみませんー", "Excuse me!", "sumimasen"), "menu")
                    .with_overlay("images/hand_raise.png"),
            ),
        )
        .with_node(
            "menu",
            Node::new(t(
                "ごちゅうもんは？",
                "What would you like to order?",
                "go-chuumon wa?",
            ))
            .with_background("images/menu_izakaya.jpg")
            .with_choices([
                Choice::goto(t("さしもり", "Sashimi platter", "sashimori"), "add")
                    .with_append("food", "sashimori")
                    .with_background("images/food_sashimori.jpg"),
                Choice::goto(t("ねぎま", "Negima yakitori", "negima"), "add")
                    .with_append("food", "negima")
                    .with_background("images/food_negima.jpg"),
                Choice::goto(t("えいひれ", "Grilled stingray fin", "eihire"), "add")
                    .with_append("food", "eihire")
                    .with_background("images/food_eihire.jpg"),
                Choice::goto(t("もつにこみ", "Motsu nikomi", "motsunikomi"), "add")
                    .with_append("food", "motsunikomi")
                    .with_background("images/food_motsunikomi.jpg"),
                // another round of drinks
                Choice::goto(t("れもんさわー", "Lemon sour", "remon sawaa"), "add")
                    .with_assign("drink", "lemon")
                    .with_background("images/drink_lemon_sour.jpg"),
                Choice::goto(t("おとこうめさわー", "Otoko-ume sour", "otoko-ume sawaa"), "add")
                    .with_assign("drink", "ume")
                    .with_background("images/drink_otoko_ume.jpg"),
                Choice::goto(t("にほんしゅ", "Sake", "nihonshu"), "add")
                    .with_assign("drink", "sake")
                    .with_background("images/drink_sake.jpg"),
            ]),
        )
        .with_node(
            "add",
            Node::new(t(
                "ほかにごちゅうもんは？",
                "Anything else?",
                "hoka ni go-chuumon wa?",
            ))
            .with_choices([
                Choice::goto(t("はい、もういっぴん", "Yes, one more", "hai, mou ippin"), "menu"),
                Choice::goto(
                    t("だいじょうぶ、おかいけいで", "No thanks, bill please", "daijoubu, okaikei de"),
                    "bill",
                ),
            ]),
        )
        .with_node(
            "bill",
            Node::new(t(
                "おかいけいで よろしいですか？",
                "Ready for the bill?",
                "okaikei de yoroshii desu ka?",
            ))
            .with_choices([
                Choice::goto(t("げんきんで", "Cash, please", "genkin de"), "end")
                    .with_assign("pay", "cash")
                    .with_overlay("images/pay_cash.png"),
                Choice::goto(t("かーどで", "Card, please", "kaado de"), "end")
                    .with_assign("pay", "card")
                    .with_overlay("images/pay_card.png"),
            ]),
        )
        .with_node(
            "end",
            Node::new(t(
                "ありがとうございました！",
                "Thank you very much!",
                "arigatou gozaimashita!",
            ))
            .with_choice(Choice::reset(t(
                "さいしょにもどる",
                "Go back to start",
                "saisho ni modoru",
            ))),
        )
}
