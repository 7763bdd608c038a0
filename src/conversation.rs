use anyhow::Result;
use raylib::prelude::*;
use crate::script::Script;
use crate::step::{Decoration, Step};

const SKY: Color = Color::new(227, 237, 247, 255);
const PEACH: Color = Color::new(255, 179, 153, 255);
const VITALS_TEXT: Color = Color::new(255, 255, 255, 230);

fn sky_step(text: &'static str) -> Step {
    Step {
        text,
        character_image: "orangecharacter",
        background_color: SKY,
        ..Step::default()
    }
}

/// The authored companion conversation: greeting and naming, vitals
/// check-in, a candle breathing exercise, a lollipop meditation and the
/// sparkle reward pages. Ordered; looping past the last page restarts
/// the conversation.
pub fn conversation() -> Result<Script> {
    Script::new(vec![
        sky_step("안녕! 민준아"),
        sky_step("나는 널 도와줄\n친구야!"),
        sky_step("너에게 이름을\n지어줄래?"),
        sky_step("와, 좋잖아!\n정말 멋진 이름이야"),
        Step {
            overlay_elements: vec![
                Decoration::image("heart", 50.0, 100.0, 30.0, 30.0),
                Decoration::image("heart", 150.0, 80.0, 25.0, 25.0),
                Decoration::image("heart", 180.0, 120.0, 20.0, 20.0).with_opacity(0.85),
            ],
            ..sky_step("우리 잘 지내보자, 민준아\n나는 항상 네 곁에 있을게!")
        },
        sky_step("민준아, 나를 봐봐~"),
        sky_step("너의 마음이 편해질때까지\n기다릴게"),
        // Heart rate page: buzzes on entry, big white reading over the
        // pulse line with a small unit label.
        Step {
            text: "100",
            character_image: "orange_character_new",
            background_color: Color::ORANGE,
            text_color: VITALS_TEXT,
            font_size: 22.0,
            character_image_size: Vector2::new(120.0, 100.0),
            enable_vibration: true,
            background_elements: vec![
                Decoration::image("heartrate_line", 100.0, 150.0, 200.0, 50.0),
            ],
            overlay_elements: vec![
                Decoration::text("BPM", 160.0, 58.0, 12.0, VITALS_TEXT),
            ],
            ..Step::default()
        },
        // Stress level page.
        Step {
            text: "80%",
            character_image: "orange_character_new",
            background_color: PEACH,
            text_color: VITALS_TEXT,
            font_size: 22.0,
            character_image_size: Vector2::new(120.0, 100.0),
            enable_vibration: true,
            background_elements: vec![
                Decoration::image("heartrate_line", 100.0, 160.0, 180.0, 40.0),
            ],
            ..Step::default()
        },
        sky_step("잘했어!\n이제 나랑 이야기해보자"),
        sky_step("이제 나를 따라서\n숨을 쉬어봐"),
        sky_step("숨을 들이 마셔서\n하나, 둘, 셋"),
        // Candle pages hide the character so the pill fills the screen.
        Step {
            background_elements: vec![
                Decoration::image("breathing_pill", 100.0, 180.0, 60.0, 120.0),
                Decoration::image("flame_top", 100.0, 120.0, 40.0, 60.0),
            ],
            ..sky_plain("여기 있는\n촛불을 후 불어서 꺼줘!")
        },
        Step {
            background_elements: vec![
                Decoration::image("breathing_pill", 100.0, 180.0, 60.0, 120.0),
            ],
            ..sky_plain("후 ~")
        },
        sky_step("한번 더 해볼까?"),
        Step {
            background_elements: vec![
                Decoration::image("breathing_pill", 100.0, 180.0, 60.0, 120.0),
                Decoration::image("flame_top", 100.0, 120.0, 40.0, 60.0),
            ],
            ..sky_step("하나, 둘, 셋")
        },
        Step {
            background_elements: vec![
                Decoration::image("breathing_pill", 100.0, 180.0, 60.0, 120.0),
            ],
            ..sky_plain("후~")
        },
        sky_step("잘했어!"),
        sky_step("사탕을\n먹어보면서 이완해볼까?"),
        sky_step("우리 언제 브레킷짜?"),
        Step {
            text: "사랑을 3번 늘려봐!",
            character_image: "human_character",
            background_color: Color::BLACK,
            text_color: Color::WHITE,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            background_elements: vec![
                Decoration::image("lollipop", 100.0, 200.0, 50.0, 50.0),
            ],
            ..Step::default()
        },
        Step {
            character_image: "human_character",
            background_color: Color::BLACK,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            background_elements: vec![
                Decoration::image("lollipop", 100.0, 200.0, 50.0, 50.0),
            ],
            overlay_elements: vec![
                Decoration::image("music_note", 60.0, 100.0, 20.0, 30.0),
                Decoration::image("music_note", 140.0, 120.0, 25.0, 35.0),
            ],
            ..Step::default()
        },
        Step {
            character_image: "human_character_pink",
            background_color: Color::BLACK,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            background_elements: vec![
                Decoration::image("lollipop", 100.0, 200.0, 50.0, 50.0),
            ],
            overlay_elements: vec![
                Decoration::image("music_note", 50.0, 90.0, 20.0, 30.0),
                Decoration::image("music_note", 80.0, 110.0, 25.0, 35.0),
                Decoration::image("music_note", 130.0, 100.0, 20.0, 30.0),
                Decoration::image("music_note", 160.0, 120.0, 25.0, 35.0),
            ],
            ..Step::default()
        },
        // Meditation climax: red character, lightning, one buzz.
        Step {
            character_image: "human_character_red",
            background_color: Color::BLACK,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            enable_vibration: true,
            overlay_elements: vec![
                Decoration::image("lightning_bolt", 70.0, 80.0, 30.0, 40.0),
                Decoration::image("lightning_bolt", 120.0, 100.0, 35.0, 45.0),
                Decoration::image("lightning_bolt", 90.0, 120.0, 25.0, 35.0),
                Decoration::image("lightning_bolt", 150.0, 90.0, 30.0, 40.0),
            ],
            ..Step::default()
        },
        sky_step("봤지? 사탕을 많이 먹으면\n건강이 나빠질 수 있어!"),
        sky_step("사탕을 잘 참은\n친구도 보러 가볼까?"),
        Step {
            text: "사탕을 1번 놀려봐",
            character_image: "human_character_happy",
            background_color: SKY,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            background_elements: vec![
                Decoration::image("lollipop", 100.0, 200.0, 50.0, 50.0),
            ],
            overlay_elements: vec![
                Decoration::image("sparkle", 70.0, 120.0, 25.0, 25.0),
                Decoration::image("sparkle", 140.0, 140.0, 20.0, 20.0),
            ],
            ..Step::default()
        },
        Step {
            character_image: "human_character_happy",
            background_color: SKY,
            character_image_size: Vector2::new(100.0, 140.0),
            character_image_offset: 20.0,
            overlay_elements: vec![
                Decoration::image("sparkle", 50.0, 100.0, 30.0, 30.0),
                Decoration::image("sparkle", 90.0, 80.0, 25.0, 25.0),
                Decoration::image("sparkle", 130.0, 110.0, 35.0, 35.0),
                Decoration::image("sparkle", 160.0, 90.0, 20.0, 20.0),
                Decoration::image("big_sparkle", 100.0, 60.0, 40.0, 40.0),
            ],
            ..Step::default()
        },
        sky_step("어때? 맛지?"),
    ])
}

/// Sky-background page with no character (candle pages).
fn sky_plain(text: &'static str) -> Step {
    Step {
        text,
        background_color: SKY,
        ..Step::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_has_twenty_nine_steps() {
        let script = conversation().unwrap();
        assert_eq!(script.len(), 29);
    }

    #[test]
    fn conversation_opens_with_the_greeting() {
        let script = conversation().unwrap();
        let first = script.step_at(0);
        assert_eq!(first.text, "안녕! 민준아");
        assert_eq!(first.character_image, "orangecharacter");
        assert!(!first.enable_vibration);
    }

    #[test]
    fn candle_pages_have_no_character() {
        let script = conversation().unwrap();
        for index in [12, 13, 16] {
            let step = script.step_at(index);
            assert!(!step.has_character(), "step {index} should hide the character");
            assert!(!step.background_elements.is_empty());
        }
    }

    #[test]
    fn vitals_pages_vibrate_and_carry_a_pulse_line() {
        let script = conversation().unwrap();
        for index in [7, 8] {
            let step = script.step_at(index);
            assert!(step.enable_vibration);
            assert_eq!(step.background_elements.len(), 1);
        }
    }

    #[test]
    fn bpm_label_is_a_text_decoration() {
        let script = conversation().unwrap();
        let labels: Vec<_> = script
            .step_at(7)
            .overlay_elements
            .iter()
            .filter(|d| matches!(d, Decoration::Text { text, .. } if *text == "BPM"))
            .collect();
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn all_opacities_are_in_unit_range() {
        let script = conversation().unwrap();
        for i in 0..script.len() {
            let step = script.step_at(i);
            for deco in step.background_elements.iter().chain(&step.overlay_elements) {
                let o = deco.opacity();
                assert!((0.0..=1.0).contains(&o), "step {i} has opacity {o}");
            }
        }
    }

    #[test]
    fn decoration_ids_are_unique_across_the_script() {
        let script = conversation().unwrap();
        let mut seen = std::collections::HashSet::new();
        for i in 0..script.len() {
            let step = script.step_at(i);
            for deco in step.background_elements.iter().chain(&step.overlay_elements) {
                assert!(seen.insert(deco.id()), "duplicate decoration id in step {i}");
            }
        }
    }
}
