use crate::core::{BackImageRule, Descriptor, DescriptorSet};

impl BackImageRule {
    pub fn matches(&self, front_img: &str) -> bool {
        match self {
            BackImageRule::Infix => front_img.contains("back."),
            BackImageRule::Prefix => front_img.starts_with("back"),
            BackImageRule::Disabled => false,
        }
    }
}

/// Pulls the first descriptor matching `rule` out of the set and points every
/// remaining descriptor's `backImg` at it.
pub fn apply_back_image(mut descriptors: Vec<Descriptor>, rule: BackImageRule) -> DescriptorSet {
    let position = descriptors.iter().position(|d| rule.matches(&d.front_img));

    let back_image = position.map(|index| descriptors.remove(index).front_img);

    if let Some(back) = &back_image {
        for descriptor in &mut descriptors {
            descriptor.back_img = Some(back.clone());
        }
    }

    DescriptorSet {
        descriptors,
        back_image,
    }
}
