use crate::AtomCollection;
use bindscope_test_data::TestFile;

fn load(file: TestFile) -> AtomCollection {
    let (path, _temp) = file.create_temp().unwrap();
    AtomCollection::load(&path).unwrap()
}

pub(crate) fn get_dimer() -> AtomCollection {
    load(TestFile::dimer_01())
}

pub(crate) fn get_single_contact_dimer() -> AtomCollection {
    load(TestFile::dimer_02())
}
