use crate::lookup_error::MemberNotFound;
use crate::member::Member;

/// The members currently rendered as cards, in display order.
///
/// Every replacement starts a new render generation. Cards carry the generation
/// they were rendered in, so a click on a card from a previous render is rejected
/// instead of opening whichever member now sits at the same position.
#[derive(Debug, Default)]
pub struct RenderedMembers {
    generation: u64,
    members: Vec<Member>,
}

impl RenderedMembers {
    /// Replace the list, returning the new generation.
    pub fn replace(&mut self, members: Vec<Member>) -> u64 {
        self.generation += 1;
        self.members = members;
        self.generation
    }

    /// Draw `members` with `draw`, then keep them if it succeeded.
    ///
    /// `draw` is handed the generation the members will be stored under. When it fails
    /// the list is emptied under that same generation, so whatever it managed to draw
    /// resolves to no member.
    pub fn render_with<F, E>(&mut self, members: Vec<Member>, draw: F) -> Result<u64, E>
    where
        F: FnOnce(&[Member], u64) -> Result<(), E>,
    {
        match draw(&members, self.generation + 1) {
            Ok(()) => Ok(self.replace(members)),
            Err(error) => {
                self.clear();
                Err(error)
            }
        }
    }

    pub fn clear(&mut self) -> u64 {
        self.replace(vec![])
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Result<&Member, MemberNotFound> {
        self.members.get(index).ok_or(MemberNotFound::OutOfRange {
            index,
            len: self.members.len(),
        })
    }

    /// Member at `index` of the render `generation`.
    pub fn get_rendered(&self, generation: u64, index: usize) -> Result<&Member, MemberNotFound> {
        if generation != self.generation {
            return Err(MemberNotFound::StaleRender {
                index,
                requested: generation,
                current: self.generation,
            });
        }
        self.get(index)
    }
}
