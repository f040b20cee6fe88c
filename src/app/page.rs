//! The estimator page

use crate::constants::PAGE_TITLE;
use crate::theme::Theme;
use crate::ui::components::{field, house, input, radio_option, InputProps};
use crate::ui::primitives::{boxed, flex, heading};
use crate::ui::space::SpaceProps;
use crate::ui::tree::{Align, Direction, Node};

pub const LOT_SLOPE_GROUP: &str = "radio";
pub const HOUSE_SIZE_NAME: &str = "house-size";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotSlope {
    Steep,
    Medium,
    Flat,
}

impl LotSlope {
    pub const ALL: [LotSlope; 3] = [LotSlope::Steep, LotSlope::Medium, LotSlope::Flat];

    pub fn label(self) -> &'static str {
        match self {
            LotSlope::Steep => "Steep, greater than 30%",
            LotSlope::Medium => "Medium, between 5% and 30%",
            LotSlope::Flat => "Flat, less than 5%",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            LotSlope::Steep => "steep",
            LotSlope::Medium => "medium",
            LotSlope::Flat => "flat",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            LotSlope::Steep => "radio1",
            LotSlope::Medium => "radio2",
            LotSlope::Flat => "radio3",
        }
    }
}

/// Build the whole page. Called once when the window mounts.
pub fn page(theme: &Theme) -> Node {
    let slopes = LotSlope::ALL
        .iter()
        .map(|s| radio_option(s.id(), LOT_SLOPE_GROUP, s.value(), s.label()))
        .collect();

    let form = boxed(theme, SpaceProps::new().pt(4))
        .width(1.0 / 2.0)
        .child(field(theme, "Lot slope", slopes))
        .child(field(
            theme,
            "House size (sqft)",
            vec![input(
                theme,
                InputProps::new().name(HOUSE_SIZE_NAME).input_type("number"),
            )],
        ));

    let illustration = flex(theme, SpaceProps::new().px(5), Direction::Column)
        .width(1.0 / 2.0)
        .align_items(Align::Center)
        .child(house());

    boxed(theme, SpaceProps::new().py(3))
        .with_class("container")
        .child(heading(theme, PAGE_TITLE))
        .child(
            flex(theme, SpaceProps::new(), Direction::Row)
                .child(form)
                .child(illustration),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HOUSE_ASSET;
    use crate::ui::tree::{Element, Tag};
    use std::collections::HashSet;

    fn radios(tree: &Node) -> Vec<&Element> {
        tree.find_all(|e| e.is_input_type("radio"))
    }

    #[test]
    fn single_heading_with_title() {
        let tree = page(&Theme::light());
        let headings = tree.find_all(|e| e.tag == Tag::Heading);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text_content(), "Build cost estimator");
    }

    #[test]
    fn three_radios_share_one_group() {
        let tree = page(&Theme::light());
        let radios = radios(&tree);
        assert_eq!(radios.len(), 3);
        let names: HashSet<_> = radios.iter().map(|r| r.attr("name")).collect();
        assert_eq!(names.len(), 1);
        assert_eq!(radios[0].attr("name"), Some(LOT_SLOPE_GROUP));
    }

    #[test]
    fn one_number_input_named_house_size() {
        let tree = page(&Theme::light());
        let numbers = tree.find_all(|e| e.is_input_type("number"));
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].attr("name"), Some(HOUSE_SIZE_NAME));
    }

    #[test]
    fn one_image_of_the_house() {
        let tree = page(&Theme::light());
        let images = tree.find_all(|e| e.tag == Tag::Image);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].attr("src"), Some(HOUSE_ASSET));
    }

    #[test]
    fn radio_ids_are_unique_and_labels_bind_their_own_input() {
        let tree = page(&Theme::light());
        let ids: Vec<_> = radios(&tree).iter().filter_map(|r| r.attr("id")).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);

        let labels = tree.find_all(|e| e.tag == Tag::Label && e.has_class("radio"));
        assert_eq!(labels.len(), 3);
        for (label, slope) in labels.iter().zip(LotSlope::ALL) {
            let node = Node::Element((*label).clone());
            let own = node.find_all(|e| e.tag == Tag::Input);
            assert_eq!(own.len(), 1);
            assert_eq!(own[0].attr("id"), Some(slope.id()));
            assert_eq!(label.attr("for"), Some(slope.id()));
            assert_eq!(label.text_content(), slope.label());
            let bound = ids.iter().filter(|id| label.attr("for") == Some(**id)).count();
            assert_eq!(bound, 1);
        }
    }

    #[test]
    fn fields_appear_in_order() {
        let tree = page(&Theme::light());
        let labels: Vec<_> = tree
            .find_all(|e| e.tag == Tag::Label && !e.has_class("radio"))
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(labels, vec!["Lot slope", "House size (sqft)"]);
    }

    #[test]
    fn two_half_width_columns() {
        let tree = page(&Theme::light());
        let row = tree
            .find_all(|e| e.layout.direction == Some(Direction::Row))
            .into_iter()
            .next()
            .expect("row");
        assert_eq!(row.children.len(), 2);
        for col in &row.children {
            assert_eq!(col.as_element().and_then(|e| e.layout.width), Some(0.5));
        }
        let right = row.children[1].as_element().expect("column");
        assert_eq!(right.layout.align_items, Some(Align::Center));
    }
}
