//! The feature cards.

use littlelemon_pages::builder::{article, h2, h3, img, p, section};
use littlelemon_pages::dom::{DomError, Element};

struct FeatureCard {
	title: &'static str,
	copy: &'static str,
	image_url: &'static str,
	image_alt: &'static str,
}

const FEATURE_CARDS: [FeatureCard; 3] = [
	FeatureCard {
		title: "Fresh Ingredients",
		copy: "We source the finest Mediterranean ingredients to create authentic flavors \
			that transport you to the sunny shores of Greece.",
		image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
		image_alt: "Fresh Mediterranean salad with olives and feta cheese",
	},
	FeatureCard {
		title: "Traditional Recipes",
		copy: "Our chefs bring generations of culinary expertise, preparing each dish with \
			time-honored techniques and passion.",
		image_url: "https://images.unsplash.com/photo-1544148103-0773bf10d330?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
		image_alt: "Chef preparing traditional Mediterranean dish in kitchen",
	},
	FeatureCard {
		title: "Cozy Atmosphere",
		copy: "Enjoy your meal in our warm, inviting space designed for memorable dining \
			experiences with family and friends.",
		image_url: "https://images.unsplash.com/photo-1559339352-11d035aa65de?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
		image_alt: "Cozy restaurant atmosphere with warm lighting and comfortable seating",
	},
];

/// Renders the three specialty cards.
pub fn features() -> Result<Element, DomError> {
	let mut container = section()?
		.class("features")
		.attr("aria-labelledby", "features-title")
		.child(
			h2()?
				.id("features-title")
				.class("sr-only")
				.text("Our Specialties")
				.build(),
		)?;

	for card in &FEATURE_CARDS {
		container = container.child(
			article()?
				.class("feature-card")
				.child(
					img()?
						.attr("src", card.image_url)
						.attr("alt", card.image_alt)
						.build(),
				)?
				.child(h3()?.text(card.title).build())?
				.child(p()?.text(card.copy).build())?
				.build(),
		)?;
	}

	Ok(container.build())
}
