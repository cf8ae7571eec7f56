//! Fixture documents for the tokenize/parse benchmarks.

/// The smallest interesting document: one shorthand query, one nested
/// field.
pub const SIMPLE_QUERY: &str = "{ hero { name } }";

/// A named operation with variables, arguments, aliases, and a fragment.
pub const HERO_COMPARISON: &str = r#"
query HeroComparison($first: Int = 3) {
  leftComparison: hero(episode: EMPIRE) {
    ...comparisonFields
  }
  rightComparison: hero(episode: JEDI) {
    ...comparisonFields
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first) {
    totalCount
    edges {
      node {
        name
      }
    }
  }
}
"#;

/// A wide document exercising every value kind, directives, inline
/// fragments, and comments.
pub const KITCHEN_SINK: &str = r#"
# Exercises most of the executable grammar in one document.
query KitchenSink($id: ID!, $enabled: Boolean = true, $tags: [String!]) {
  node(id: $id) {
    id
    ... on User @include(if: $enabled) {
      name
      profilePicture(size: 64) {
        width
        height
        url
      }
    }
    ... @skip(if: $enabled) {
      createdAt
    }
    ...metadataFields @include(if: true)
  }
  search(
    text: "escaped \"query\" text\n",
    first: 10,
    weights: [0.5, 1.0, -2.5e-3],
    filter: { tags: $tags, exact: false, extra: null, mode: FUZZY },
  ) {
    __typename
  }
}

mutation UpdateName($id: ID!, $name: String!) {
  updateUser(id: $id, name: $name) {
    id
    name
  }
}

fragment metadataFields on Node {
  id
  createdAt
  updatedAt
}
"#;
