// Memory management unit: the single `Memory` implementor that owns the 64 KiB address
// space and routes each access to the component responsible for it. Ranges follow the
// documented DMG memory map in `memory.rs`'s header comment.
use super::cartridge::Cartridge;
use super::intf::Intf;
use super::memory::Memory;
use super::ppu::Ppu;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Mmu {
    pub cartridge: Cartridge,
    pub ppu: Ppu,
    intf: Rc<RefCell<Intf>>,
    inte: u8,
    wram: [u8; 0x2000],
    hram: [u8; 0x7f],
    // $FF00-$FF7F I/O ports this crate does not drive a peripheral for (joypad, serial,
    // timer, sound): plain storage so a ROM that pokes them reads back what it wrote
    // instead of panicking, per SPEC_FULL.md §4.1/§6.
    io: [u8; 0x80],
}

impl Mmu {
    pub fn power_up(cartridge: Cartridge) -> Self {
        let intf = Rc::new(RefCell::new(Intf::power_up()));
        Self {
            cartridge,
            ppu: Ppu::power_up(intf.clone()),
            intf,
            inte: 0x00,
            wram: [0x00; 0x2000],
            hram: [0x00; 0x7f],
            io: [0xff; 0x80],
        }
    }
}

impl Memory for Mmu {
    fn get(&self, a: u16) -> u8 {
        match a {
            0x0000..=0x7fff => self.cartridge.get(a),
            0x8000..=0x9fff => self.ppu.get(a),
            0xa000..=0xbfff => 0xff,
            0xc000..=0xdfff => self.wram[(a - 0xc000) as usize],
            0xe000..=0xfdff => self.wram[(a - 0xe000) as usize],
            0xfe00..=0xfe9f => self.ppu.get(a),
            0xfea0..=0xfeff => 0x00,
            0xff0f => self.intf.borrow().data,
            0xff40..=0xff45 | 0xff47 | 0xff4a | 0xff4b => self.ppu.get(a),
            0xff00..=0xff7f => self.io[(a - 0xff00) as usize],
            0xff80..=0xfffe => self.hram[(a - 0xff80) as usize],
            0xffff => self.inte,
        }
    }

    fn set(&mut self, a: u16, v: u8) {
        match a {
            0x0000..=0x7fff => self.cartridge.set(a, v),
            0x8000..=0x9fff => self.ppu.set(a, v),
            0xa000..=0xbfff => {}
            0xc000..=0xdfff => self.wram[(a - 0xc000) as usize] = v,
            0xe000..=0xfdff => self.wram[(a - 0xe000) as usize] = v,
            0xfe00..=0xfe9f => self.ppu.set(a, v),
            0xfea0..=0xfeff => {}
            0xff0f => self.intf.borrow_mut().data = v,
            0xff40..=0xff45 | 0xff47 | 0xff4a | 0xff4b => self.ppu.set(a, v),
            0xff00..=0xff7f => self.io[(a - 0xff00) as usize] = v,
            0xff80..=0xfffe => self.hram[(a - 0xff80) as usize] = v,
            0xffff => self.inte = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mmu() -> Mmu {
        Mmu::power_up(Cartridge::padded(vec![0u8; 0x150]))
    }

    #[test]
    fn wram_echoes_between_c000_and_e000() {
        let mut m = mmu();
        m.set(0xc010, 0x42);
        assert_eq!(m.get(0xe010), 0x42);
        m.set(0xe020, 0x07);
        assert_eq!(m.get(0xc020), 0x07);
    }

    #[test]
    fn hram_roundtrips() {
        let mut m = mmu();
        m.set(0xff90, 0x11);
        assert_eq!(m.get(0xff90), 0x11);
    }

    #[test]
    fn ie_and_if_are_independent_of_io_passthrough() {
        let mut m = mmu();
        m.set(0xffff, 0x1f);
        m.set(0xff0f, 0x01);
        assert_eq!(m.get(0xffff), 0x1f);
        assert_eq!(m.get(0xff0f), 0x01);
    }

    #[test]
    fn out_of_scope_port_remembers_last_write() {
        let mut m = mmu();
        m.set(0xff01, 0xab);
        assert_eq!(m.get(0xff01), 0xab);
    }

    #[test]
    fn vram_and_oam_route_to_ppu() {
        let mut m = mmu();
        m.set(0x8010, 0x99);
        assert_eq!(m.ppu.get(0x8010), 0x99);
        m.set(0xfe05, 0x55);
        assert_eq!(m.ppu.get(0xfe05), 0x55);
    }
}
