#[cfg(test)]
pub mod test {
    use crate::error::ConfbindError;
    use crate::map::ValueMap;
    use crate::shape::{DefaultsProvider, Field, Record, Walker};

    // -- Every leaf carries a declared default --------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct EmbeddedWithAllDefaults {
        pub embedded_foo: String,
        pub embedded_bar: i64,
    }

    impl Record for EmbeddedWithAllDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf(
                "embedded_foo",
                &mut self.embedded_foo,
                Field::new().default_value("test11"),
            )?;
            w.leaf(
                "embedded_bar",
                &mut self.embedded_bar,
                Field::new().default_value("12"),
            )?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct NestedWithAllDefaults {
        pub foo: String,
        pub bar: i64,
    }

    impl Record for NestedWithAllDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf("foo", &mut self.foo, Field::new().default_value("test21"))?;
            w.leaf("bar", &mut self.bar, Field::new().default_value("22"))?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct ConfigWithAllDefaults {
        pub foo: String,
        pub bar: i64,
        pub embedded: EmbeddedWithAllDefaults,
        pub nested: NestedWithAllDefaults,
        /// Not registered in `walk`; binding must leave it untouched.
        pub ignored: String,
    }

    impl Record for ConfigWithAllDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf("foo", &mut self.foo, Field::new().default_value("test1"))?;
            w.leaf("bar", &mut self.bar, Field::new().default_value("2"))?;
            w.embedded(&mut self.embedded)?;
            w.nested("nested", &mut self.nested, Field::new())?;
            Ok(())
        }
    }

    // -- Some leaves have no default ------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct EmbeddedWithPartialDefaults {
        pub embedded_foo: String,
        pub embedded_bar: i64,
    }

    impl Record for EmbeddedWithPartialDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf(
                "embedded_foo",
                &mut self.embedded_foo,
                Field::new().default_value("test11"),
            )?;
            w.leaf("embedded_bar", &mut self.embedded_bar, Field::new())?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct NestedWithPartialDefaults {
        pub foo: String,
        pub bar: i64,
    }

    impl Record for NestedWithPartialDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf("foo", &mut self.foo, Field::new())?;
            w.leaf("bar", &mut self.bar, Field::new().default_value("22"))?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct ConfigWithPartialDefaults {
        pub foo: String,
        pub bar: i64,
        pub embedded: EmbeddedWithPartialDefaults,
        pub nested: NestedWithPartialDefaults,
        pub ignored: String,
    }

    impl Record for ConfigWithPartialDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.leaf("foo", &mut self.foo, Field::new())?;
            w.leaf("bar", &mut self.bar, Field::new().default_value("1"))?;
            w.embedded(&mut self.embedded)?;
            w.nested("nested", &mut self.nested, Field::new())?;
            Ok(())
        }
    }

    // -- Defaults supplied through the capability -----------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct EmbeddedWithProvidedDefaults {
        pub embedded_foo: String,
        pub embedded_bar: i64,
    }

    impl DefaultsProvider for EmbeddedWithProvidedDefaults {
        fn supplied_defaults(&self) -> ValueMap {
            ValueMap::from_iter([("EMBEDDED_BAR", "12")])
        }
    }

    impl Record for EmbeddedWithProvidedDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.defaults_from(&*self);
            w.leaf(
                "embedded_foo",
                &mut self.embedded_foo,
                Field::new().default_value("test11"),
            )?;
            w.leaf("embedded_bar", &mut self.embedded_bar, Field::new())?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct NestedWithProvidedDefaults {
        pub foo: String,
        pub bar: i64,
    }

    impl DefaultsProvider for NestedWithProvidedDefaults {
        fn supplied_defaults(&self) -> ValueMap {
            ValueMap::from_iter([("FOO", "test21")])
        }
    }

    impl Record for NestedWithProvidedDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.defaults_from(&*self);
            w.leaf("foo", &mut self.foo, Field::new())?;
            w.leaf("bar", &mut self.bar, Field::new().default_value("22"))?;
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct ConfigWithProvidedDefaults {
        pub foo: String,
        pub bar: i64,
        pub embedded: EmbeddedWithProvidedDefaults,
        pub nested: NestedWithProvidedDefaults,
        pub ignored: String,
    }

    impl DefaultsProvider for ConfigWithProvidedDefaults {
        fn supplied_defaults(&self) -> ValueMap {
            ValueMap::from_iter([("BAR", "2")])
        }
    }

    impl Record for ConfigWithProvidedDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.defaults_from(&*self);
            w.leaf("foo", &mut self.foo, Field::new().default_value("test1"))?;
            w.leaf("bar", &mut self.bar, Field::new())?;
            w.embedded(&mut self.embedded)?;
            w.nested("nested", &mut self.nested, Field::new())?;
            Ok(())
        }
    }

    // -- Both a literal default and a capability default for one key ----------

    #[derive(Debug, Default, PartialEq)]
    pub struct ConfigWithCompetingDefaults {
        pub bar: String,
    }

    impl DefaultsProvider for ConfigWithCompetingDefaults {
        fn supplied_defaults(&self) -> ValueMap {
            ValueMap::from_iter([("BAR", "capability")])
        }
    }

    impl Record for ConfigWithCompetingDefaults {
        fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
            w.defaults_from(&*self);
            w.leaf("bar", &mut self.bar, Field::new().default_value("literal"))?;
            Ok(())
        }
    }

    #[test]
    fn all_defaults_fixture_has_expected_shape() {
        use crate::builder::Builder;

        let mut conf = ConfigWithAllDefaults::default();
        Builder::new().build(&mut conf).unwrap();
        assert_eq!(conf.foo, "test1");
        assert_eq!(conf.nested.bar, 22);
    }
}
