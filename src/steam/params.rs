#[cfg(test)]
mod tests;

/// Ordered name/value pairs, used both as a query string and as a form body.
///
/// Encoding follows what steam expects from php's `http_build_query`: booleans become `1`/`0`,
/// absent values are left out and lists are spelled `name[0]`, `name[1]`, ...
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Params {
        Params { pairs: vec![] }
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Params {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_opt<T: ToString>(self, name: &str, value: Option<T>) -> Params {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn with_flag(self, name: &str, value: bool) -> Params {
        self.with(name, if value { 1 } else { 0 })
    }

    pub fn with_list<T, I>(mut self, name: &str, values: I) -> Params
    where
        T: ToString,
        I: IntoIterator<Item = T>,
    {
        for (i, v) in values.into_iter().enumerate() {
            self.pairs.push((format!("{}[{}]", name, i), v.to_string()));
        }
        self
    }

    /// First value recorded under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameter names only, for logging without leaking the api key.
    pub fn names(&self) -> String {
        self.pairs
            .iter()
            .map(|(n, _)| n.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
