//! Plain-text contact cards.

use rf_civic::{Representative, Tier};
use std::fmt;

/// What the renderer needs to know about favorites.
#[derive(Debug, Clone, Copy)]
pub enum FavoritesView<'a> {
    Disabled,
    Enabled(&'a [Representative]),
}

impl FavoritesView<'_> {
    fn star(&self, rep: &Representative) -> Option<&'static str> {
        match self {
            Self::Disabled => None,
            Self::Enabled(favorites) => {
                let starred = favorites.iter().any(|f| f.is_same(&rep.name, &rep.office));
                Some(if starred { "★" } else { "☆" })
            }
        }
    }
}

/// Render lookup results grouped by tier, followed by the favorites section.
///
/// Empty tiers and an empty favorites list are omitted.
#[must_use]
pub fn render_results(reps: &[Representative], favorites: FavoritesView<'_>) -> String {
    Results { reps, favorites }.to_string()
}

/// One representative's card.
#[must_use]
pub fn render_card(rep: &Representative, favorites: FavoritesView<'_>) -> String {
    Card { rep, favorites }.to_string()
}

struct Results<'a> {
    reps: &'a [Representative],
    favorites: FavoritesView<'a>,
}

impl fmt::Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections: Vec<(&str, Vec<&Representative>)> = Tier::ALL
            .into_iter()
            .map(|tier| {
                let group: Vec<&Representative> =
                    self.reps.iter().filter(|rep| rep.tier == tier).collect();
                (tier.heading(), group)
            })
            .collect();
        if let FavoritesView::Enabled(list) = self.favorites {
            sections.push(("Favorites", list.iter().collect()));
        }

        let sections = sections.into_iter().filter(|(_, group)| !group.is_empty());
        for (index, (heading, group)) in sections.enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {heading} ({}) ==", group.len())?;
            for rep in group {
                let card = Card {
                    rep,
                    favorites: self.favorites,
                };
                write!(f, "\n{card}")?;
            }
        }

        Ok(())
    }
}

struct Card<'a> {
    rep: &'a Representative,
    favorites: FavoritesView<'a>,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rep = self.rep;

        if let Some(star) = self.favorites.star(rep) {
            write!(f, "{star} ")?;
        }
        writeln!(f, "{} [{}]", rep.name, rep.party)?;
        writeln!(f, "  {}", rep.office)?;

        match &rep.photo_url {
            Some(url) => writeln!(f, "  🖼  {url}")?,
            None => writeln!(f, "  ({})", rep.initials())?,
        }

        if let Some(email) = rep.primary_email() {
            writeln!(f, "  📧 {email}")?;
        }
        if let Some(phone) = rep.primary_phone() {
            writeln!(f, "  📞 {phone}")?;
        }
        for channel in &rep.social_channels {
            let url = channel.profile_url().unwrap_or_else(|| "#".to_string());
            writeln!(
                f,
                "  {} @{} ({url})",
                channel.platform.icon(),
                channel.handle
            )?;
        }
        if let Some(site) = rep.website() {
            writeln!(f, "  🌐 {site}")?;
        }
        if let Some(address) = &rep.postal_address {
            writeln!(f, "  🏛  {address}")?;
        }

        Ok(())
    }
}
