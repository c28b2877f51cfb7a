//! Selector data model, fluent builder and rendering.

use std::fmt;

use crate::error::SelectorError;

/// Fragment categories, in the order the selector grammar admits them.
///
/// A selector under construction tracks the highest category it has reached
/// and rejects fragments for any earlier category with
/// [`SelectorError::OutOfOrder`]. Variant order is the grammar order, so
/// categories compare by rank. `Combined` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    #[default]
    Empty,
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combined,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
            Self::Combined => "combinator",
        };
        write!(f, "{name}")
    }
}

/// CSS combinators joining two selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,            // >
    AdjacentSibling,  // +
    GeneralSibling,   // ~
}

impl Combinator {
    /// The literal CSS token for this combinator. The descendant combinator's
    /// token is a single space.
    pub fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// CSS specificity for determining rule precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

/// One simple-or-compound selector term, optionally combined with a
/// following selector.
///
/// Created by the entry points ([`element`], [`id`], [`class`], [`attr`],
/// [`pseudo_class`], [`pseudo_element`]), grown through the fluent fragment
/// methods, optionally terminated by [`combine`] or
/// [`Selector::combine_with`], and rendered with [`Selector::render`].
///
/// Fragment text is passed through verbatim: nothing is escaped or
/// validated, so malformed CSS in produces malformed CSS out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    reached: Category,
    next: Option<(Combinator, Box<Selector>)>,
}

impl Selector {
    /// Sets the type (element name) fragment.
    pub fn element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::Element)?;
        if self.element.is_some() {
            return Err(SelectorError::Duplicate(Category::Element));
        }
        self.element = Some(name.to_string());
        Ok(self)
    }

    /// Sets the `#id` fragment.
    pub fn id(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::Id)?;
        if self.id.is_some() {
            return Err(SelectorError::Duplicate(Category::Id));
        }
        self.id = Some(name.to_string());
        Ok(self)
    }

    /// Appends a `.class` fragment. Repeatable.
    pub fn class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::Class)?;
        self.classes.push(name.to_string());
        Ok(self)
    }

    /// Appends an `[attr]` fragment. `text` is the raw attribute selector
    /// body, e.g. `href$=".png"`. Repeatable.
    pub fn attr(&mut self, text: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::Attribute)?;
        self.attributes.push(text.to_string());
        Ok(self)
    }

    /// Appends a `:pseudo-class` fragment. Repeatable.
    pub fn pseudo_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::PseudoClass)?;
        self.pseudo_classes.push(name.to_string());
        Ok(self)
    }

    /// Sets the `::pseudo-element` fragment.
    pub fn pseudo_element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.advance(Category::PseudoElement)?;
        if self.pseudo_element.is_some() {
            return Err(SelectorError::Duplicate(Category::PseudoElement));
        }
        self.pseudo_element = Some(name.to_string());
        Ok(self)
    }

    /// Attaches `right` after this selector with the given combinator.
    ///
    /// Combination is terminal: it may follow any fragment, but once a
    /// selector is combined, every further fragment or combine call on it
    /// fails with [`SelectorError::OutOfOrder`]. `right` is cloned, so the
    /// caller keeps an independently renderable value.
    pub fn combine_with(
        &mut self,
        combinator: Combinator,
        right: &Selector,
    ) -> Result<&mut Self, SelectorError> {
        if self.reached == Category::Combined {
            return Err(SelectorError::OutOfOrder {
                attempted: Category::Combined,
                reached: Category::Combined,
            });
        }
        self.reached = Category::Combined;
        self.next = Some((combinator, Box::new(right.clone())));
        Ok(self)
    }

    /// Renders the selector to its CSS string form.
    ///
    /// Pure: call it any number of times, the selector is not modified.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Computes the CSS specificity of the whole selector, summed across all
    /// combined terms. Attributes and pseudo-classes count as classes;
    /// pseudo-elements count as types.
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity {
            ids: u32::from(self.id.is_some()),
            classes: (self.classes.len() + self.attributes.len() + self.pseudo_classes.len())
                as u32,
            types: u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some()),
        };
        if let Some((_, next)) = &self.next {
            let tail = next.specificity();
            spec.ids += tail.ids;
            spec.classes += tail.classes;
            spec.types += tail.types;
        }
        spec
    }

    /// Advances the order state, rejecting categories earlier than the one
    /// already reached. Same-category calls pass; the duplicate checks for
    /// the at-most-once categories run after this.
    fn advance(&mut self, category: Category) -> Result<(), SelectorError> {
        if category < self.reached {
            return Err(SelectorError::OutOfOrder {
                attempted: category,
                reached: self.reached,
            });
        }
        self.reached = category;
        Ok(())
    }

    /// Attaches `(combinator, right)` at the rightmost end of the combinator
    /// chain, so each node holds at most one link.
    fn attach(&mut self, combinator: Combinator, right: Selector) {
        match &mut self.next {
            Some((_, tail)) => tail.attach(combinator, right),
            None => {
                self.reached = Category::Combined;
                self.next = Some((combinator, Box::new(right)));
            }
        }
    }

    pub(crate) fn from_parts(
        element: Option<String>,
        id: Option<String>,
        classes: Vec<String>,
        attributes: Vec<String>,
        pseudo_classes: Vec<String>,
        pseudo_element: Option<String>,
    ) -> Self {
        let reached = if pseudo_element.is_some() {
            Category::PseudoElement
        } else if !pseudo_classes.is_empty() {
            Category::PseudoClass
        } else if !attributes.is_empty() {
            Category::Attribute
        } else if !classes.is_empty() {
            Category::Class
        } else if id.is_some() {
            Category::Id
        } else if element.is_some() {
            Category::Element
        } else {
            Category::Empty
        };

        Self {
            element,
            id,
            classes,
            attributes,
            pseudo_classes,
            pseudo_element,
            reached,
            next: None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.element {
            write!(f, "{name}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            write!(f, "[{attr}]")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{pseudo}")?;
        }
        // The combinator token is rendered with one space on each side, so a
        // descendant combinator (itself a space) yields three spaces.
        if let Some((combinator, next)) = &self.next {
            write!(f, " {combinator} {next}")?;
        }
        Ok(())
    }
}

/// Starts a selector with a type (element name) fragment.
pub fn element(name: &str) -> Selector {
    Selector {
        element: Some(name.to_string()),
        reached: Category::Element,
        ..Selector::default()
    }
}

/// Starts a selector with an `#id` fragment.
pub fn id(name: &str) -> Selector {
    Selector {
        id: Some(name.to_string()),
        reached: Category::Id,
        ..Selector::default()
    }
}

/// Starts a selector with a `.class` fragment.
pub fn class(name: &str) -> Selector {
    Selector {
        classes: vec![name.to_string()],
        reached: Category::Class,
        ..Selector::default()
    }
}

/// Starts a selector with an `[attr]` fragment.
pub fn attr(text: &str) -> Selector {
    Selector {
        attributes: vec![text.to_string()],
        reached: Category::Attribute,
        ..Selector::default()
    }
}

/// Starts a selector with a `:pseudo-class` fragment.
pub fn pseudo_class(name: &str) -> Selector {
    Selector {
        pseudo_classes: vec![name.to_string()],
        reached: Category::PseudoClass,
        ..Selector::default()
    }
}

/// Starts a selector with a `::pseudo-element` fragment.
pub fn pseudo_element(name: &str) -> Selector {
    Selector {
        pseudo_element: Some(name.to_string()),
        reached: Category::PseudoElement,
        ..Selector::default()
    }
}

/// Combines two selectors with a CSS combinator.
///
/// Copies `left` field by field and attaches `(combinator, right)`; neither
/// argument is consumed, so callers keep independently renderable values.
/// When `left` already ends in a combinator chain the new pair is attached at
/// the rightmost tail, which renders identically to the flat chain:
///
/// ```rust
/// use cssbuild::{combine, element, Combinator};
///
/// let pair = combine(&element("dt"), Combinator::AdjacentSibling, &element("dd"));
/// let chain = combine(&pair, Combinator::GeneralSibling, &element("dd"));
/// assert_eq!(chain.render(), "dt + dd ~ dd");
/// ```
pub fn combine(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    let mut combined = left.clone();
    combined.attach(combinator, right.clone());
    combined
}
